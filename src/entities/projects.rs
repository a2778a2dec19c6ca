use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Portfolio project. `slug` carries the only author-assigned unique
/// constraint in the schema. `technologies` is a required JSON-encoded list
/// of strings, decoded at the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub description: String,

    pub long_description: Option<String>,

    pub image_url: Option<String>,

    pub github_url: Option<String>,

    pub technologies: String,

    pub category: String,

    pub featured: bool,

    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
