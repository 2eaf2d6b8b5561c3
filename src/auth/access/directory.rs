//! Record lookups needed by the access guard

use crate::core::models::{Employee, SponsoredMember};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read-only view of cases and employees
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessDirectory: Send + Sync {
    /// Fetch a case by id
    async fn find_case(&self, case_id: Uuid) -> Result<Option<SponsoredMember>>;

    /// Fetch an employee by id
    async fn find_employee(&self, employee_id: Uuid) -> Result<Option<Employee>>;
}
