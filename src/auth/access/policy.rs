//! Chain-of-command evaluation

use crate::core::models::{Employee, Role, SponsoredMember};

use super::types::{AccessDecision, DenialReason};

/// Stateless case access policy
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseAccessPolicy;

impl CaseAccessPolicy {
    /// Decide whether `requester` may access `case`.
    ///
    /// `handler` is the employee referenced by `case.assigned_caseworker`.
    /// `handler_manager` is the record referenced by `handler.manager`; it is
    /// only consulted when a supervisor requests a case handled by an sdw
    /// (see [`Self::needs_manager_lookup`]). Rules, first match wins:
    ///
    /// 1. no requester → authentication required
    /// 2. no case → case not found
    /// 3. head → authorized
    /// 4. unknown requester role → invalid user role
    /// 5. handler missing or not the assigned caseworker → handler not found
    /// 6. supervisor: sdw handler must report to the requester, supervisor
    ///    handler must be the requester, head handler must be the requester's
    ///    manager
    /// 7. sdw: handler must be the requester
    pub fn evaluate(
        requester: Option<&Employee>,
        case: Option<&SponsoredMember>,
        handler: Option<&Employee>,
        handler_manager: Option<&Employee>,
    ) -> AccessDecision {
        let Some(requester) = requester else {
            return AccessDecision::Denied(DenialReason::AuthenticationRequired);
        };
        let Some(case) = case else {
            return AccessDecision::Denied(DenialReason::CaseNotFound);
        };

        match &requester.role {
            Role::Head => return AccessDecision::Authorized,
            Role::Unrecognized(_) => {
                return AccessDecision::Denied(DenialReason::InvalidUserRole);
            }
            Role::Supervisor | Role::Sdw => {}
        }

        let handler = match handler {
            Some(handler) if handler.id == case.assigned_caseworker => handler,
            _ => return AccessDecision::Denied(DenialReason::HandlerNotFound),
        };

        match requester.role {
            Role::Supervisor => Self::evaluate_supervisor(requester, handler, handler_manager),
            Role::Sdw => {
                if handler.id == requester.id {
                    AccessDecision::Authorized
                } else {
                    AccessDecision::Denied(DenialReason::NotAssignedToYou)
                }
            }
            Role::Head | Role::Unrecognized(_) => {
                AccessDecision::Denied(DenialReason::InvalidUserRole)
            }
        }
    }

    fn evaluate_supervisor(
        requester: &Employee,
        handler: &Employee,
        handler_manager: Option<&Employee>,
    ) -> AccessDecision {
        match handler.role {
            Role::Sdw => {
                // The manager record must exist and be the one the sdw points at.
                let supervises = match (handler.manager, handler_manager) {
                    (Some(manager_id), Some(manager)) => {
                        manager.id == manager_id && manager.id == requester.id
                    }
                    _ => false,
                };
                if supervises {
                    AccessDecision::Authorized
                } else {
                    AccessDecision::Denied(DenialReason::NotUnderSupervision)
                }
            }
            Role::Supervisor => {
                if handler.id == requester.id {
                    AccessDecision::Authorized
                } else {
                    AccessDecision::Denied(DenialReason::NotAssignedToYou)
                }
            }
            Role::Head => {
                if requester.manager == Some(handler.id) {
                    AccessDecision::Authorized
                } else {
                    AccessDecision::Denied(DenialReason::NotUnderSupervision)
                }
            }
            Role::Unrecognized(_) => AccessDecision::Denied(DenialReason::InvalidHandlerRole),
        }
    }

    /// Whether evaluating this pair requires the handler's manager record
    pub fn needs_manager_lookup(requester: &Employee, handler: &Employee) -> bool {
        requester.is_supervisor() && handler.is_sdw()
    }
}
