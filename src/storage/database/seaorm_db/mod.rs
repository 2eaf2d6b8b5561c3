// Module declarations
mod case_ops;
mod closure_ops;
mod connection;
mod directory;
mod employee_ops;
mod form_ops;
mod spu_ops;
mod stats_ops;
mod types;

// Re-export public types
pub use types::{CaseStatistics, DatabaseBackendType, SeaOrmDatabase};
