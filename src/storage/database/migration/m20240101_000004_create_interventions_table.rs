use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interventions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interventions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interventions::CaseId).uuid().not_null())
                    .col(ColumnDef::new(Interventions::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Interventions::InterventionNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Interventions::Details).json().not_null())
                    .col(ColumnDef::new(Interventions::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Interventions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Interventions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interventions_case_id")
                            .from(Interventions::Table, Interventions::CaseId)
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
                    .name("idx_interventions_case_kind_number")
                    .table(Interventions::Table)
                    .col(Interventions::CaseId)
                    .col(Interventions::Kind)
                    .col(Interventions::InterventionNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interventions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Interventions {
    Table,
    Id,
    CaseId,
    Kind,
    InterventionNumber,
    Details,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SponsoredMembers {
    Table,
    Id,
}
