//! Authentication endpoints

use crate::core::models::Employee;
use crate::server::middleware::{Requester, client_identifier};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::casework::require_requester;
use crate::utils::error::{CaseworkError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub employee: Employee,
}

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(me)),
    );
}

/// Exchange credentials for an access token
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let client_id = client_identifier(&req);

    if let Err(wait_seconds) = state.login_limiter.check_allowed(&client_id) {
        warn!("Login blocked for {} ({}s remaining)", client_id, wait_seconds);
        return Err(CaseworkError::rate_limit(format!(
            "Too many failed attempts. Try again in {} seconds",
            wait_seconds
        )));
    }

    let body = body.into_inner();
    match state.auth.login(&body.username, &body.password).await {
        Ok(outcome) => {
            state.login_limiter.record_success(&client_id);
            Ok(ApiResponse::ok(LoginResponse {
                access_token: outcome.token.access_token,
                token_type: outcome.token.token_type,
                expires_in: outcome.token.expires_in,
                employee: outcome.employee,
            }))
        }
        Err(e @ CaseworkError::Unauthenticated(_)) => {
            state.login_limiter.record_failure(&client_id);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Tokens are stateless; the client discards its copy
pub async fn logout(requester: Requester) -> Result<HttpResponse> {
    let employee = require_requester(requester.employee())?;
    info!("Employee logged out: {}", employee.username);

    Ok(ApiResponse::ok(serde_json::json!({ "message": "logged out" })))
}

/// The authenticated employee
pub async fn me(requester: Requester) -> Result<HttpResponse> {
    let employee = require_requester(requester.employee())?;
    Ok(ApiResponse::ok(employee))
}
