//! Access decision types

use crate::utils::error::CaseworkError;
use serde::Serialize;
use std::fmt;

/// Outcome of evaluating the case access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum AccessDecision {
    Authorized,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessDecision::Authorized)
    }

    pub fn denial(&self) -> Option<DenialReason> {
        match self {
            AccessDecision::Authorized => None,
            AccessDecision::Denied(reason) => Some(*reason),
        }
    }
}

/// Why access was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No requester on the request
    AuthenticationRequired,
    /// Target case does not exist
    CaseNotFound,
    /// The case's assigned caseworker record is missing or does not match
    HandlerNotFound,
    /// Supervisor is not the manager of the sdw handling the case
    NotUnderSupervision,
    /// Case is handled by someone other than the requester
    NotAssignedToYou,
    /// Handler holds a role outside head/supervisor/sdw
    InvalidHandlerRole,
    /// Requester holds a role outside head/supervisor/sdw
    InvalidUserRole,
}

impl DenialReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenialReason::AuthenticationRequired => "authentication required",
            DenialReason::CaseNotFound => "case not found",
            DenialReason::HandlerNotFound => "case handler not found",
            DenialReason::NotUnderSupervision => "case not under your supervision",
            DenialReason::NotAssignedToYou => "case is not assigned to you",
            DenialReason::InvalidHandlerRole => "invalid handler role",
            DenialReason::InvalidUserRole => "invalid user role",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<DenialReason> for CaseworkError {
    fn from(reason: DenialReason) -> Self {
        match reason {
            DenialReason::AuthenticationRequired => CaseworkError::unauthenticated(reason.message()),
            DenialReason::CaseNotFound => CaseworkError::not_found(reason.message()),
            _ => CaseworkError::access_denied(reason.message()),
        }
    }
}

/// What the caller intends to do with the case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessIntent {
    /// View the case or its forms
    Read,
    /// Create or edit forms, update the profile, resolve closure
    Mutate,
}
