//! Activities service routes

use std::path::Path as FsPath;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
};
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::{
    AppState,
    error::{ApiError, ApiResult, AuthError},
    middleware::{authorization_header, require_admin},
    models::{EmailQuery, LoginRequest, LoginResponse, MessageResponse},
    session::SESSION_TTL_HOURS,
};

/// Create the router for the activities service
///
/// `static_dir` is served under `/static`.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    let admin_routes = Router::new()
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_from_activity),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/activities", get(get_activities))
        .route("/activities/:activity_name/signup", post(signup_for_activity))
        .route("/admin/login", post(admin_login))
        .route("/admin/logout", post(admin_logout))
        .merge(admin_routes)
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Send browsers to the front-end
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "activities-service"
    }))
}

/// List every activity with its roster
pub async fn get_activities(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.activity_store.list_activities().await)
}

/// Sign up a student for an activity
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(EmailQuery { email }) = query.map_err(bad_query)?;

    state
        .activity_store
        .signup(&activity_name, &email)
        .await
        .inspect_err(|e| {
            warn!(
                "Signup of {} for {} refused: {}",
                email, activity_name, e
            )
        })?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

/// Unregister a student from an activity (teachers only)
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(EmailQuery { email }) = query.map_err(bad_query)?;

    state
        .activity_store
        .unregister(&activity_name, &email)
        .await
        .inspect_err(|e| {
            warn!(
                "Unregister of {} from {} refused: {}",
                email, activity_name, e
            )
        })?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}

/// Teacher login endpoint
pub async fn admin_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if !payload.is_complete() {
        return Err(ApiError::BadRequest(
            "username and password required".to_string(),
        ));
    }

    let (username, password) = payload.as_text().ok_or(AuthError::InvalidCredentials)?;
    let token = state.session_manager.login(username, password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token,
            expires_in_hours: SESSION_TTL_HOURS,
        }),
    ))
}

/// Teacher logout endpoint
pub async fn admin_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let authorization = authorization_header(&headers)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Authorization header required".to_string()))?;

    state.session_manager.logout(&authorization).await;
    info!("Logout request handled");

    Ok(Json(json!({"detail": "logged out"})))
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}
