use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Owner profile. At most one row is ever read (find-first); the seed pins
/// the row to id 1 so re-seeding stays idempotent.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "profiles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub title: String,

    pub subtitle: String,

    pub bio: String,

    pub email: String,

    pub location: String,

    pub github_url: Option<String>,

    pub instagram_url: Option<String>,

    pub linkedin_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
