use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseClosures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseClosures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CaseClosures::CaseId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CaseClosures::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(CaseClosures::Reason).text().not_null())
                    .col(ColumnDef::new(CaseClosures::RequestedBy).uuid().not_null())
                    .col(ColumnDef::new(CaseClosures::ResolvedBy).uuid().null())
                    .col(
                        ColumnDef::new(CaseClosures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CaseClosures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_case_closures_case_id")
                            .from(CaseClosures::Table, CaseClosures::CaseId)
                            .to(SponsoredMembers::Table, SponsoredMembers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_case_closures_status")
                    .table(CaseClosures::Table)
                    .col(CaseClosures::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseClosures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CaseClosures {
    Table,
    Id,
    CaseId,
    Status,
    Reason,
    RequestedBy,
    ResolvedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SponsoredMembers {
    Table,
    Id,
}
