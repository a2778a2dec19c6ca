use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::skills::{self, Column};
use crate::store::StoreError;

/// Skills in ascending display order, optionally narrowed to one category.
/// An unknown category simply yields an empty list.
pub async fn list(
    db: &DatabaseConnection,
    category: Option<&str>,
) -> Result<Vec<skills::Model>, StoreError> {
    let mut query = skills::Entity::find();

    if let Some(category) = category {
        query = query.filter(Column::Category.eq(category));
    }

    Ok(query.order_by_asc(Column::Order).all(db).await?)
}

/// Bulk create used by the seed. Not idempotent: every call appends rows.
pub async fn create_many(
    db: &DatabaseConnection,
    rows: Vec<skills::ActiveModel>,
) -> Result<(), StoreError> {
    skills::Entity::insert_many(rows).exec(db).await?;
    Ok(())
}
