//! Intervention form endpoints

use crate::core::models::{InterventionKind, InterventionUpdate, NewIntervention};
use crate::server::middleware::Requester;
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// `?kind=home_visit`
#[derive(Debug, Default, Deserialize)]
pub struct KindFilter {
    pub kind: Option<InterventionKind>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cases/{case_id}/interventions")
            .route(web::get().to(list_interventions))
            .route(web::post().to(create_intervention)),
    )
    .service(
        web::resource("/cases/{case_id}/interventions/{form_id}")
            .route(web::get().to(get_intervention))
            .route(web::put().to(update_intervention)),
    );
}

async fn list_interventions(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
    query: web::Query<KindFilter>,
) -> Result<HttpResponse> {
    let interventions = state
        .casework
        .list_interventions(requester.employee(), path.into_inner(), query.kind)
        .await?;
    Ok(list_response(interventions))
}

async fn get_intervention(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (case_id, form_id) = path.into_inner();
    let intervention = state
        .casework
        .get_intervention(requester.employee(), case_id, form_id)
        .await?;
    Ok(ApiResponse::ok(intervention))
}

async fn create_intervention(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
    body: web::Json<NewIntervention>,
) -> Result<HttpResponse> {
    let intervention = state
        .casework
        .create_intervention(requester.employee(), path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::created(intervention))
}

async fn update_intervention(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<InterventionUpdate>,
) -> Result<HttpResponse> {
    let (case_id, form_id) = path.into_inner();
    let intervention = state
        .casework
        .update_intervention(requester.employee(), case_id, form_id, body.into_inner())
        .await?;
    Ok(ApiResponse::ok(intervention))
}
