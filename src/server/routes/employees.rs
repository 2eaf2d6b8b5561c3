//! Employee endpoints

use crate::core::models::NewEmployee;
use crate::server::middleware::Requester;
use crate::server::routes::{ApiResponse, list_response};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::get().to(list_employees))
            .route(web::post().to(create_employee)),
    )
    .route("/employees/{employee_id}", web::get().to(get_employee))
    .route(
        "/employees/{employee_id}/deactivate",
        web::post().to(deactivate_employee),
    );
}

async fn list_employees(state: web::Data<AppState>, requester: Requester) -> Result<HttpResponse> {
    let employees = state.casework.list_employees(requester.employee()).await?;
    Ok(list_response(employees))
}

async fn get_employee(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let employee = state
        .casework
        .get_employee(requester.employee(), path.into_inner())
        .await?;
    Ok(ApiResponse::ok(employee))
}

async fn create_employee(
    state: web::Data<AppState>,
    requester: Requester,
    body: web::Json<NewEmployee>,
) -> Result<HttpResponse> {
    let employee = state
        .casework
        .create_employee(requester.employee(), body.into_inner())
        .await?;
    Ok(ApiResponse::created(employee))
}

async fn deactivate_employee(
    state: web::Data<AppState>,
    requester: Requester,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let employee = state
        .casework
        .deactivate_employee(requester.employee(), path.into_inner())
        .await?;
    Ok(ApiResponse::ok(employee))
}
