use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SponsoredMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SponsoredMembers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::SmNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::FirstName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SponsoredMembers::MiddleName).string().null())
                    .col(
                        ColumnDef::new(SponsoredMembers::LastName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SponsoredMembers::Sex).string().null())
                    .col(ColumnDef::new(SponsoredMembers::DateOfBirth).date().null())
                    .col(ColumnDef::new(SponsoredMembers::Address).string().null())
                    .col(
                        ColumnDef::new(SponsoredMembers::ProblemPresented)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::ObservationFindings)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::AssignedCaseworkerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SponsoredMembers::SpuId).uuid().null())
                    .col(
                        ColumnDef::new(SponsoredMembers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::Version)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SponsoredMembers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sponsored_members_caseworker_id")
                            .from(
                                SponsoredMembers::Table,
                                SponsoredMembers::AssignedCaseworkerId,
                            )
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sponsored_members_spu_id")
                            .from(SponsoredMembers::Table, SponsoredMembers::SpuId)
                            .to(Spus::Table, Spus::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sponsored_members_caseworker_id")
                    .table(SponsoredMembers::Table)
                    .col(SponsoredMembers::AssignedCaseworkerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SponsoredMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SponsoredMembers {
    Table,
    Id,
    SmNumber,
    FirstName,
    MiddleName,
    LastName,
    Sex,
    DateOfBirth,
    Address,
    ProblemPresented,
    ObservationFindings,
    AssignedCaseworkerId,
    SpuId,
    IsActive,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Spus {
    Table,
    Id,
}
