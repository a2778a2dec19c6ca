use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::entities::contact_messages;
use crate::store::StoreError;

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Append a contact message; `created_at` is assigned by the store.
pub async fn create(
    db: &DatabaseConnection,
    data: NewContactMessage,
) -> Result<contact_messages::Model, StoreError> {
    let row = contact_messages::ActiveModel {
        name: Set(data.name),
        email: Set(data.email),
        subject: Set(data.subject),
        message: Set(data.message),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let stored = contact_messages::Model {
            id: 7,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: None,
            message: "hi".to_string(),
            created_at: Utc::now().fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let created = create(
            &db,
            NewContactMessage {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                subject: None,
                message: "hi".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.subject, None);
    }
}
