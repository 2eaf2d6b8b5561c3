//! HTTP response handling for errors

use super::types::CaseworkError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    pub timestamp: i64,
}

impl CaseworkError {
    pub(super) fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            CaseworkError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            CaseworkError::Jwt(_) => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            CaseworkError::AccessDenied(_) => (StatusCode::FORBIDDEN, "ACCESS_DENIED"),
            CaseworkError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            CaseworkError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            CaseworkError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            CaseworkError::Serialization(_) => (StatusCode::BAD_REQUEST, "SERIALIZATION_ERROR"),
            CaseworkError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            CaseworkError::RateLimit(_) => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED"),
            CaseworkError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            CaseworkError::Config(_)
            | CaseworkError::Yaml(_)
            | CaseworkError::Io(_)
            | CaseworkError::Crypto(_)
            | CaseworkError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message safe to show to API clients
    pub(super) fn public_message(&self) -> String {
        match self {
            CaseworkError::Database(_) => "Database operation failed".to_string(),
            CaseworkError::Jwt(_) => "Invalid or expired token".to_string(),
            CaseworkError::Config(_)
            | CaseworkError::Yaml(_)
            | CaseworkError::Io(_)
            | CaseworkError::Crypto(_)
            | CaseworkError::Internal(_) => "An internal error occurred".to_string(),
            _ => self.to_string(),
        }
    }
}

impl ResponseError for CaseworkError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, code) = self.status_and_code();
        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            message: self.public_message(),
            code: code.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}
