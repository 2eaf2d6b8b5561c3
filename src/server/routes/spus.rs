//! Sub-project unit endpoints

use crate::server::middleware::Requester;
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::services::NewSpu;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/spus")
            .route(web::get().to(list_spus))
            .route(web::post().to(create_spu)),
    );
}

async fn list_spus(state: web::Data<AppState>, requester: Requester) -> Result<HttpResponse> {
    let spus = state.casework.list_spus(requester.employee()).await?;
    Ok(list_response(spus))
}

async fn create_spu(
    state: web::Data<AppState>,
    requester: Requester,
    body: web::Json<NewSpu>,
) -> Result<HttpResponse> {
    let spu = state
        .casework
        .create_spu(requester.employee(), body.into_inner())
        .await?;
    Ok(ApiResponse::created(spu))
}
