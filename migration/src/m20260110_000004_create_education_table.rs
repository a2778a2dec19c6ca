use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(255).not_null())
                    .col(ColumnDef::new(Education::School).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Education::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::StartDate).date().not_null())
                    .col(ColumnDef::new(Education::EndDate).date())
                    .col(
                        ColumnDef::new(Education::Current)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Education::Description).text().not_null())
                    .col(
                        ColumnDef::new(Education::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    School,
    Location,
    StartDate,
    EndDate,
    Current,
    Description,
    Order,
}
