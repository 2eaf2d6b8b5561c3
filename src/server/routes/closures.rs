//! Case closure workflow endpoints

use crate::core::models::{CaseClosure, ClosureStatus, SponsoredMember};
use crate::server::middleware::Requester;
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::services::ClosureRequest;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `?status=Pending|Accepted`, pending when omitted
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<ClosureStatus>,
}

#[derive(Debug, Serialize)]
struct AcceptedClosure {
    closure: CaseClosure,
    case: SponsoredMember,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/cases/{case_id}/closure", web::post().to(request_closure))
        .route("/closures", web::get().to(list_closures))
        .route("/closures/{closure_id}/accept", web::post().to(accept_closure))
        .route("/closures/{closure_id}/reject", web::post().to(reject_closure));
}

async fn request_closure(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
    body: web::Json<ClosureRequest>,
) -> Result<HttpResponse> {
    let closure = state
        .casework
        .request_closure(requester.employee(), path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::created(closure))
}

async fn list_closures(
    state: web::Data<AppState>,
    requester: Requester,
    query: web::Query<StatusFilter>,
) -> Result<HttpResponse> {
    let status = query.status.unwrap_or(ClosureStatus::Pending);
    let closures = state
        .casework
        .list_closures(requester.employee(), Some(status))
        .await?;
    Ok(list_response(closures))
}

async fn accept_closure(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let (closure, case) = state
        .casework
        .accept_closure(requester.employee(), path.into_inner())
        .await?;
    Ok(ApiResponse::ok(AcceptedClosure { closure, case }))
}

async fn reject_closure(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let closure = state
        .casework
        .reject_closure(requester.employee(), path.into_inner())
        .await?;
    Ok(ApiResponse::ok(closure))
}
