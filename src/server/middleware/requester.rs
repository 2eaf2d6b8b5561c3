//! Per-request requester resolution

use crate::core::models::Employee;
use crate::server::middleware::helpers::extract_bearer_token;
use crate::server::state::AppState;
use crate::utils::error::CaseworkError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::LocalBoxFuture;

/// The employee behind the request's bearer token.
///
/// Resolution never fails on a bad or missing token: the value is simply
/// empty and the service layer answers 401. A deactivated employee resolves
/// to nothing as well.
#[derive(Debug, Clone)]
pub struct Requester(pub Option<Employee>);

impl Requester {
    pub fn employee(&self) -> Option<&Employee> {
        self.0.as_ref()
    }
}

impl FromRequest for Requester {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_bearer_token(req.headers()).map(str::to_string);

        Box::pin(async move {
            let state = state
                .ok_or_else(|| CaseworkError::internal("application state is not configured"))?;

            let Some(token) = token else {
                return Ok(Requester(None));
            };

            let employee = state.auth.authenticate_token(&token).await?;
            Ok(Requester(employee))
        })
    }
}
