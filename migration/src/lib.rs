pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_profiles_table;
mod m20260110_000002_create_skills_table;
mod m20260110_000003_create_experiences_table;
mod m20260110_000004_create_education_table;
mod m20260110_000005_create_projects_table;
mod m20260110_000006_create_site_settings_table;
mod m20260110_000007_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_profiles_table::Migration),
            Box::new(m20260110_000002_create_skills_table::Migration),
            Box::new(m20260110_000003_create_experiences_table::Migration),
            Box::new(m20260110_000004_create_education_table::Migration),
            Box::new(m20260110_000005_create_projects_table::Migration),
            Box::new(m20260110_000006_create_site_settings_table::Migration),
            Box::new(m20260110_000007_create_contact_messages_table::Migration),
        ]
    }
}
