//! Services module
//!
//! This module contains business logic and service implementations

pub mod casework;
pub mod statistics;

pub use casework::{
    BootstrapHead, CaseDocument, CaseworkService, ClosureRequest, EmployeeSummary, NewSpu,
    ReassignRequest,
};
pub use statistics::{DashboardStatistics, SpuCaseCount};
