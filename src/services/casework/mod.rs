//! Casework operations
//!
//! Every operation that touches a case runs [`CaseAccessGuard`] first, so the
//! hierarchy rules apply the same way to reads, form writes and closures.

mod cases;
mod closures;
mod document;
mod employees;
mod interventions;
mod reports;
mod spus;
mod visibility;


pub use cases::ReassignRequest;
pub use closures::ClosureRequest;
pub use document::{CaseDocument, EmployeeSummary};
pub use employees::BootstrapHead;
pub use spus::NewSpu;

use crate::auth::access::CaseAccessGuard;
use crate::core::models::{Employee, Role};
use crate::storage::StorageLayer;
use crate::storage::database::Database;
use crate::utils::error::{CaseworkError, Result};
use std::sync::Arc;

/// Case-management service shared by all HTTP handlers
#[derive(Debug, Clone)]
pub struct CaseworkService {
    storage: Arc<StorageLayer>,
}

impl CaseworkService {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    pub(crate) fn db(&self) -> &Database {
        self.storage.db()
    }

    fn guard(&self) -> CaseAccessGuard<'_, Database> {
        CaseAccessGuard::new(self.storage.db())
    }
}

/// Unwrap the requester or fail with 401
pub(crate) fn require_requester(requester: Option<&Employee>) -> Result<&Employee> {
    requester.ok_or_else(|| CaseworkError::unauthenticated("authentication required"))
}

/// Fail with 403 unless the requester holds one of `roles`
pub(crate) fn require_role(requester: &Employee, roles: &[Role], action: &str) -> Result<()> {
    if roles.contains(&requester.role) {
        Ok(())
    } else {
        Err(CaseworkError::access_denied(format!(
            "your role may not {}",
            action
        )))
    }
}
