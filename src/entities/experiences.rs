use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Work experience entry. `technologies` holds a JSON-encoded list of strings
/// and is decoded at the API boundary, never here.
///
/// `current == true` implies `end_date` is unset; the schema does not enforce
/// this, readers treat `current` as authoritative.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "experiences")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub company: String,

    /// Employment type, e.g. "alternance" or "stage"
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub employment_type: String,

    pub location: String,

    pub start_date: Date,

    pub end_date: Option<Date>,

    pub current: bool,

    pub description: String,

    pub technologies: Option<String>,

    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
