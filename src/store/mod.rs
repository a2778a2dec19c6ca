//! Persistence layer: one module per entity, plain async functions over an
//! injected [`sea_orm::DatabaseConnection`]. No cross-entity relations exist,
//! each table stands alone.

pub mod contact;
pub mod education;
pub mod experiences;
pub mod profile;
pub mod projects;
pub mod settings;
pub mod skills;

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Duplicate value on a unique column (project slug, setting key)
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// A technologies column that does not decode as a JSON string list
    #[error("malformed technologies column: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(String),
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// Maps unique-index violations to [`StoreError::Conflict`] on write paths
/// that can collide (slug, setting key).
pub(crate) fn map_unique_err(e: DbErr) -> StoreError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        StoreError::Conflict(e.to_string())
    } else {
        StoreError::Database(e.to_string())
    }
}
