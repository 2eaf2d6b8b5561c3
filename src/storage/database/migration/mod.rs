use sea_orm_migration::prelude::*;

mod m20240101_000001_create_spus_table;
mod m20240101_000002_create_employees_table;
mod m20240101_000003_create_sponsored_members_table;
mod m20240101_000004_create_interventions_table;
mod m20240101_000005_create_progress_reports_table;
mod m20240101_000006_create_case_closures_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_spus_table::Migration),
            Box::new(m20240101_000002_create_employees_table::Migration),
            Box::new(m20240101_000003_create_sponsored_members_table::Migration),
            Box::new(m20240101_000004_create_interventions_table::Migration),
            Box::new(m20240101_000005_create_progress_reports_table::Migration),
            Box::new(m20240101_000006_create_case_closures_table::Migration),
        ]
    }
}
