//! Dashboard endpoints

use crate::server::middleware::Requester;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard/statistics", web::get().to(statistics));
}

async fn statistics(state: web::Data<AppState>, requester: Requester) -> Result<HttpResponse> {
    let stats = state
        .casework
        .dashboard_statistics(requester.employee())
        .await?;
    Ok(ApiResponse::ok(stats))
}
