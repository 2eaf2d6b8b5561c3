//! Progress report endpoints

use crate::core::models::{NewProgressReport, ProgressReportUpdate};
use crate::server::middleware::Requester;
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cases/{case_id}/progress-reports")
            .route(web::get().to(list_progress_reports))
            .route(web::post().to(create_progress_report)),
    )
    .service(
        web::resource("/cases/{case_id}/progress-reports/{form_id}")
            .route(web::get().to(get_progress_report))
            .route(web::put().to(update_progress_report)),
    );
}

async fn list_progress_reports(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let reports = state
        .casework
        .list_progress_reports(requester.employee(), path.into_inner())
        .await?;
    Ok(list_response(reports))
}

async fn get_progress_report(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (case_id, form_id) = path.into_inner();
    let report = state
        .casework
        .get_progress_report(requester.employee(), case_id, form_id)
        .await?;
    Ok(ApiResponse::ok(report))
}

async fn create_progress_report(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
    body: web::Json<NewProgressReport>,
) -> Result<HttpResponse> {
    let report = state
        .casework
        .create_progress_report(requester.employee(), path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::created(report))
}

async fn update_progress_report(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<ProgressReportUpdate>,
) -> Result<HttpResponse> {
    let (case_id, form_id) = path.into_inner();
    let report = state
        .casework
        .update_progress_report(requester.employee(), case_id, form_id, body.into_inner())
        .await?;
    Ok(ApiResponse::ok(report))
}
