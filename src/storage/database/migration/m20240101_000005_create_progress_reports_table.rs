use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressReports::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressReports::CaseId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProgressReports::ReportNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProgressReports::PeriodStart)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProgressReports::PeriodEnd).date().not_null())
                    .col(ColumnDef::new(ProgressReports::Summary).text().not_null())
                    .col(ColumnDef::new(ProgressReports::Recommendation).text().null())
                    .col(ColumnDef::new(ProgressReports::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(ProgressReports::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProgressReports::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_reports_case_id")
                            .from(ProgressReports::Table, ProgressReports::CaseId)
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
                    .name("idx_progress_reports_case_number")
                    .table(ProgressReports::Table)
                    .col(ProgressReports::CaseId)
                    .col(ProgressReports::ReportNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressReports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProgressReports {
    Table,
    Id,
    CaseId,
    ReportNumber,
    PeriodStart,
    PeriodEnd,
    Summary,
    Recommendation,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SponsoredMembers {
    Table,
    Id,
}
