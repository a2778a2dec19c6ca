use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::entities::experiences::{self, Column};
use crate::store::StoreError;

/// All experiences in ascending display order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<experiences::Model>, StoreError> {
    Ok(experiences::Entity::find()
        .order_by_asc(Column::Order)
        .all(db)
        .await?)
}

pub async fn create(
    db: &DatabaseConnection,
    row: experiences::ActiveModel,
) -> Result<experiences::Model, StoreError> {
    Ok(row.insert(db).await?)
}
