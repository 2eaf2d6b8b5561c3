//! HTTP route modules
//!
//! Every route lives under `/api`. Handlers take the [`Requester`] extractor
//! and hand it to the casework service, which performs the access checks.
//!
//! [`Requester`]: crate::server::middleware::Requester

pub mod auth;
pub mod cases;
pub mod closures;
pub mod dashboard;
pub mod employees;
pub mod interventions;
pub mod progress_reports;
pub mod spus;

use actix_web::{HttpResponse, web};
use serde::Serialize;

/// Standard API response structure
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data
    pub data: T,
    /// Additional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            meta: None,
        }
    }

    /// Create a successful response with metadata
    pub fn success_with_meta(data: T, meta: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
            meta: Some(meta),
        }
    }

    pub fn ok(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::success(data))
    }
}

/// List payload with its element count in `meta`
pub fn list_response<T: Serialize>(items: Vec<T>) -> HttpResponse {
    let meta = serde_json::json!({ "total": items.len() });
    HttpResponse::Ok().json(ApiResponse::success_with_meta(items, meta))
}

/// Mount every API route under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(auth::configure_routes)
            .configure(spus::configure_routes)
            .configure(employees::configure_routes)
            .configure(cases::configure_routes)
            .configure(interventions::configure_routes)
            .configure(progress_reports::configure_routes)
            .configure(closures::configure_routes)
            .configure(dashboard::configure_routes),
    );
}
