use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Profiles::Title).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Profiles::Subtitle)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::Bio).text().not_null())
                    .col(ColumnDef::new(Profiles::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Profiles::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::GithubUrl).text())
                    .col(ColumnDef::new(Profiles::InstagramUrl).text())
                    .col(ColumnDef::new(Profiles::LinkedinUrl).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Name,
    Title,
    Subtitle,
    Bio,
    Email,
    Location,
    GithubUrl,
    InstagramUrl,
    LinkedinUrl,
}
