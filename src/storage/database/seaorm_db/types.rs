use crate::utils::error::CaseworkError;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use std::collections::BTreeMap;
use uuid::Uuid;

/// SeaORM-based database implementation
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Raw counts over a set of cases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStatistics {
    pub active_cases: u64,
    pub closed_cases: u64,
    /// Keyed by intervention kind
    pub interventions_by_kind: BTreeMap<String, u64>,
    pub progress_reports: u64,
    pub pending_closures: u64,
    /// Active cases per unit; `None` collects cases without a unit
    pub cases_per_spu: BTreeMap<Option<Uuid>, u64>,
}

/// Map a write error, turning unique-key violations into a conflict
pub(super) fn write_error(err: DbErr, what: &str) -> CaseworkError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CaseworkError::conflict(format!("{} already exists", what))
        }
        _ => CaseworkError::Database(err),
    }
}
