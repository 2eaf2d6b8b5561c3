//! HTTP middleware and request extractors
//!
//! - Request ID tracking
//! - Requester resolution from the bearer token
//! - Login brute-force protection

mod auth_rate_limiter;
mod helpers;
mod request_id;
mod requester;


pub use auth_rate_limiter::AuthRateLimiter;
pub use helpers::{client_identifier, extract_bearer_token};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
pub use requester::Requester;
