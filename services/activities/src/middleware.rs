//! Admin authentication middleware

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{AppState, error::ApiError};

/// Read the Authorization header as text, if present
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as a
/// missing header.
pub fn authorization_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .map(|header| String::from_utf8_lossy(header.as_bytes()).into_owned())
}

/// Reject the request unless it carries a live admin token
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = authorization_header(req.headers()).unwrap_or_default();

    if !state.session_manager.validate(&authorization).await {
        warn!("Rejected admin request to {}", req.uri().path());
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}
