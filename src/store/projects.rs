use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::entities::projects::{self, Column};
use crate::store::{map_unique_err, StoreError};

/// Equality filters for the project listing. `featured: false` means
/// "no featured filter", matching the query-string contract where only the
/// literal value `true` narrows the list.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub featured: bool,
    pub category: Option<String>,
}

/// Projects in ascending display order, optionally narrowed by the filter.
pub async fn list(
    db: &DatabaseConnection,
    filter: ProjectFilter,
) -> Result<Vec<projects::Model>, StoreError> {
    let mut query = projects::Entity::find();

    if filter.featured {
        query = query.filter(Column::Featured.eq(true));
    }

    if let Some(category) = filter.category {
        query = query.filter(Column::Category.eq(category));
    }

    Ok(query.order_by_asc(Column::Order).all(db).await?)
}

pub async fn find_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<projects::Model>, StoreError> {
    Ok(projects::Entity::find()
        .filter(Column::Slug.eq(slug))
        .one(db)
        .await?)
}

/// Fails with [`StoreError::Conflict`] on a duplicate slug.
pub async fn create(
    db: &DatabaseConnection,
    row: projects::ActiveModel,
) -> Result<projects::Model, StoreError> {
    row.insert(db).await.map_err(map_unique_err)
}
