use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};

use crate::entities::profiles;
use crate::store::StoreError;

/// The seed pins the profile to a fixed id so re-running stays idempotent.
pub const SEED_PROFILE_ID: i32 = 1;

/// The logically current profile is whatever row is found first; `None`
/// when the store is empty.
pub async fn find_current(db: &DatabaseConnection) -> Result<Option<profiles::Model>, StoreError> {
    Ok(profiles::Entity::find().one(db).await?)
}

/// Create-or-keep, keyed on the model's id. The existing row wins: the seed
/// upsert never overwrites operator edits.
pub async fn upsert(
    db: &DatabaseConnection,
    profile: profiles::Model,
) -> Result<profiles::Model, StoreError> {
    if let Some(existing) = profiles::Entity::find_by_id(profile.id).one(db).await? {
        return Ok(existing);
    }

    Ok(profile.into_active_model().insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_profile(id: i32, name: &str) -> profiles::Model {
        profiles::Model {
            id,
            name: name.to_string(),
            title: "Développeur Fullstack".to_string(),
            subtitle: "Alternant".to_string(),
            bio: "Bio".to_string(),
            email: "someone@example.com".to_string(),
            location: "Anglet".to_string(),
            github_url: Some("https://github.com/someone".to_string()),
            instagram_url: None,
            linkedin_url: None,
        }
    }

    #[tokio::test]
    async fn test_find_current_returns_first_row() {
        let profile = sample_profile(SEED_PROFILE_ID, "François");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile.clone()]])
            .into_connection();

        let found = find_current(&db).await.unwrap();
        assert_eq!(found, Some(profile));
    }

    #[tokio::test]
    async fn test_find_current_empty_store_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        assert_eq!(find_current(&db).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_inserts_when_absent() {
        let profile = sample_profile(SEED_PROFILE_ID, "François");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()]) // find_by_id miss
            .append_query_results(vec![vec![profile.clone()]]) // INSERT .. RETURNING
            .into_connection();

        let created = upsert(&db, profile.clone()).await.unwrap();
        assert_eq!(created, profile);

        // one SELECT plus one INSERT
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_single_row() {
        let existing = sample_profile(SEED_PROFILE_ID, "François");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing.clone()]])
            .into_connection();

        let kept = upsert(&db, sample_profile(SEED_PROFILE_ID, "Quelqu'un d'autre"))
            .await
            .unwrap();

        // the stored row wins over the incoming seed data
        assert_eq!(kept.name, "François");

        // only the lookup ran, no INSERT
        assert_eq!(db.into_transaction_log().len(), 1);
    }
}
