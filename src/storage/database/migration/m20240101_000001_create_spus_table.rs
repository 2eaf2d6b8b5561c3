use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Spus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Spus::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Spus::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Spus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Spus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Spus {
    Table,
    Id,
    Name,
    IsActive,
    CreatedAt,
}
