//! Lookup-then-evaluate guard used by every case endpoint

use crate::core::models::{Employee, SponsoredMember};
use crate::utils::error::{CaseworkError, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use super::directory::AccessDirectory;
use super::policy::CaseAccessPolicy;
use super::types::{AccessDecision, AccessIntent};

/// Result of a guarded lookup, before denials are turned into errors
#[derive(Debug, Clone)]
pub struct AccessOutcome {
    pub decision: AccessDecision,
    pub case: Option<SponsoredMember>,
    pub handler: Option<Employee>,
}

/// A case the requester has been cleared to use
#[derive(Debug, Clone)]
pub struct AuthorizedCase {
    pub case: SponsoredMember,
    /// Assigned caseworker; absent only when a head reaches a dangling case
    pub handler: Option<Employee>,
}

/// Fetches the records the policy needs and evaluates it
pub struct CaseAccessGuard<'a, D: AccessDirectory + ?Sized> {
    directory: &'a D,
}

impl<'a, D: AccessDirectory + ?Sized> CaseAccessGuard<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Evaluate access to `case_id` without failing on denial.
    ///
    /// Errors only when the case lookup itself fails. A failed handler or
    /// manager lookup counts as a missing record.
    pub async fn decide(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
    ) -> Result<AccessOutcome> {
        let Some(requester) = requester else {
            return Ok(AccessOutcome {
                decision: CaseAccessPolicy::evaluate(None, None, None, None),
                case: None,
                handler: None,
            });
        };

        let case = self.directory.find_case(case_id).await?;
        let handler = match &case {
            Some(case) => self.lookup_employee(case.assigned_caseworker).await,
            None => None,
        };

        let handler_manager = match &handler {
            Some(handler) if CaseAccessPolicy::needs_manager_lookup(requester, handler) => {
                match handler.manager {
                    Some(manager_id) => self.lookup_employee(manager_id).await,
                    None => None,
                }
            }
            _ => None,
        };

        let decision = CaseAccessPolicy::evaluate(
            Some(requester),
            case.as_ref(),
            handler.as_ref(),
            handler_manager.as_ref(),
        );

        debug!(
            requester = %requester.id,
            role = %requester.role,
            case_id = %case_id,
            decision = ?decision,
            "Evaluated case access"
        );

        Ok(AccessOutcome {
            decision,
            case,
            handler,
        })
    }

    /// Evaluate access and return the case, or the error the denial maps to.
    ///
    /// `Mutate` additionally requires the case to be active.
    pub async fn authorize(
        &self,
        requester: Option<&Employee>,
        case_id: Uuid,
        intent: AccessIntent,
    ) -> Result<AuthorizedCase> {
        let outcome = self.decide(requester, case_id).await?;

        if let AccessDecision::Denied(reason) = outcome.decision {
            warn!(
                requester = ?requester.map(|r| r.id),
                case_id = %case_id,
                reason = %reason,
                "Case access denied"
            );
            return Err(reason.into());
        }

        let case = outcome
            .case
            .ok_or_else(|| CaseworkError::internal("authorized decision without a case"))?;

        if intent == AccessIntent::Mutate && !case.is_active {
            return Err(CaseworkError::conflict("case is closed"));
        }

        Ok(AuthorizedCase {
            case,
            handler: outcome.handler,
        })
    }

    async fn lookup_employee(&self, employee_id: Uuid) -> Option<Employee> {
        match self.directory.find_employee(employee_id).await {
            Ok(employee) => employee,
            Err(e) => {
                warn!(employee_id = %employee_id, error = %e, "Employee lookup failed during access check");
                None
            }
        }
    }
}
