//! Case (sponsored member) endpoints

use crate::core::models::{NewSponsoredMember, SponsoredMemberUpdate};
use crate::server::middleware::Requester;
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::services::ReassignRequest;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// `?active=true|false`
#[derive(Debug, Default, Deserialize)]
pub struct CaseFilter {
    pub active: Option<bool>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cases")
            .route(web::get().to(list_cases))
            .route(web::post().to(create_case)),
    )
    .service(
        web::resource("/cases/{case_id}")
            .route(web::get().to(get_case))
            .route(web::put().to(update_case)),
    )
    .route("/cases/{case_id}/caseworker", web::put().to(reassign_case))
    .route("/cases/{case_id}/document", web::get().to(case_document));
}

async fn list_cases(
    state: web::Data<AppState>,
    requester: Requester,
    query: web::Query<CaseFilter>,
) -> Result<HttpResponse> {
    let cases = state
        .casework
        .list_cases(requester.employee(), query.active)
        .await?;
    Ok(list_response(cases))
}

async fn get_case(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let case = state
        .casework
        .get_case(requester.employee(), path.into_inner())
        .await?;
    Ok(ApiResponse::ok(case))
}

async fn create_case(
    state: web::Data<AppState>,
    requester: Requester,
    body: web::Json<NewSponsoredMember>,
) -> Result<HttpResponse> {
    let case = state
        .casework
        .create_case(requester.employee(), body.into_inner())
        .await?;
    Ok(ApiResponse::created(case))
}

async fn update_case(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
    body: web::Json<SponsoredMemberUpdate>,
) -> Result<HttpResponse> {
    let case = state
        .casework
        .update_case(requester.employee(), path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::ok(case))
}

async fn reassign_case(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
    body: web::Json<ReassignRequest>,
) -> Result<HttpResponse> {
    let case = state
        .casework
        .reassign_case(requester.employee(), path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::ok(case))
}

async fn case_document(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let document = state
        .casework
        .case_document(requester.employee(), path.into_inner())
        .await?;
    Ok(ApiResponse::ok(document))
}
