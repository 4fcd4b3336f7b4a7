//! Custom error types for the activities service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures of roster mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No activity carries the requested name
    #[error("Activity not found")]
    ActivityNotFound,

    /// The email is already on the roster
    #[error("Student is already signed up")]
    AlreadySignedUp,

    /// The email is not on the roster
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Failures of teacher authentication
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No teacher matches the submitted username and password
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Custom error type for the HTTP surface
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Missing, unknown or expired admin token
    #[error("Admin authentication required")]
    Unauthorized,

    /// Bad request with message
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApiError::Registry(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "detail": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
