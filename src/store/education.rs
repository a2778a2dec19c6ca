use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::entities::education::{self, Column};
use crate::store::StoreError;

/// All education entries in ascending display order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<education::Model>, StoreError> {
    Ok(education::Entity::find()
        .order_by_asc(Column::Order)
        .all(db)
        .await?)
}

pub async fn create(
    db: &DatabaseConnection,
    row: education::ActiveModel,
) -> Result<education::Model, StoreError> {
    Ok(row.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_education(id: i32, order: i32) -> education::Model {
        education::Model {
            id,
            degree: "BUT Informatique".to_string(),
            school: "IUT de Bayonne".to_string(),
            location: "Anglet".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            end_date: None,
            current: true,
            description: "Formation complète en informatique.".to_string(),
            order,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_ascending_order() {
        let rows = vec![sample_education(1, 1), sample_education(2, 2)];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows.clone()])
            .into_connection();

        let listed = list(&db).await.unwrap();
        assert_eq!(listed, rows);
        assert!(listed.windows(2).all(|w| w[0].order <= w[1].order));
    }
}
