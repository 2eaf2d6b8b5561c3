//! HTTP route handlers

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Liveness plus a database round trip
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage = state.storage.health_check().await;

    let mut response = if storage.overall {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response.json(json!({
        "status": if storage.overall { "healthy" } else { "unhealthy" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "storage": storage,
    }))
}
