use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::site_settings::{self, Column};
use crate::store::{map_unique_err, StoreError};

pub async fn find_by_key(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<site_settings::Model>, StoreError> {
    Ok(site_settings::Entity::find()
        .filter(Column::Key.eq(key))
        .one(db)
        .await?)
}

/// Bulk create used by the seed. Fails with [`StoreError::Conflict`] on a
/// duplicate key.
pub async fn create_many(
    db: &DatabaseConnection,
    rows: Vec<site_settings::ActiveModel>,
) -> Result<(), StoreError> {
    site_settings::Entity::insert_many(rows)
        .exec(db)
        .await
        .map_err(map_unique_err)?;
    Ok(())
}
