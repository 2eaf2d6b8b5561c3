//! Which cases and employees a requester can see in listings.
//!
//! The case scope mirrors the access policy: a listing never shows a case
//! the policy would refuse to open.

use super::CaseworkService;
use crate::core::models::{CaseScope, Employee, Role};
use crate::utils::error::Result;
use tracing::debug;

impl CaseworkService {
    /// Caseworkers whose cases `requester` may list
    pub async fn case_scope(&self, requester: &Employee) -> Result<CaseScope> {
        let scope = match &requester.role {
            Role::Head => CaseScope::All,
            Role::Supervisor => {
                let mut handlers = vec![requester.id];

                let sdws = self
                    .db()
                    .list_employees_managed_by(requester.id, Some(&Role::Sdw))
                    .await?;
                handlers.extend(sdws.iter().map(|e| e.id));

                if let Some(manager_id) = requester.manager {
                    if let Some(manager) = self.db().find_employee_by_id(manager_id).await? {
                        if manager.is_head() {
                            handlers.push(manager.id);
                        }
                    }
                }

                CaseScope::HandledBy(handlers)
            }
            Role::Sdw => CaseScope::HandledBy(vec![requester.id]),
            Role::Unrecognized(_) => CaseScope::HandledBy(Vec::new()),
        };

        debug!(requester = %requester.id, scope = ?scope, "Resolved case scope");
        Ok(scope)
    }

    /// Whether `requester` may see the employee record `other`
    pub(super) fn can_view_employee(requester: &Employee, other: &Employee) -> bool {
        match &requester.role {
            Role::Head => true,
            Role::Supervisor => {
                other.id == requester.id || (other.is_sdw() && requester.manages(other))
            }
            Role::Sdw => other.id == requester.id,
            Role::Unrecognized(_) => false,
        }
    }
}
