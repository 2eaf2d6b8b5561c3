//! Helper functions for middleware

use actix_web::HttpRequest;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Bearer token from the `Authorization` header, if any
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();

    (!token.is_empty()).then_some(token)
}

/// Client identifier used to key login attempts
pub fn client_identifier(req: &HttpRequest) -> String {
    let ip = req
        .connection_info()
        .peer_addr()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!("ip:{}", ip)
}
