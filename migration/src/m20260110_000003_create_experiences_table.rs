use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Type).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Experiences::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::Current)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    // JSON-encoded list of strings, decoded at the API boundary
                    .col(ColumnDef::new(Experiences::Technologies).text())
                    .col(
                        ColumnDef::new(Experiences::Order)
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
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Type,
    Location,
    StartDate,
    EndDate,
    Current,
    Description,
    Technologies,
    Order,
}
