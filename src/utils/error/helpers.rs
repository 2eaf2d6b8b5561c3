//! Helper functions for creating specific error types

use super::types::CaseworkError;

impl CaseworkError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn access_denied<S: Into<String>>(message: S) -> Self {
        Self::AccessDenied(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn rate_limit<S: Into<String>>(message: S) -> Self {
        Self::RateLimit(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error came from a denied or missing requester
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthenticated(_) | Self::AccessDenied(_))
    }
}
