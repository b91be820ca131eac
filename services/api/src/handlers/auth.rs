//! Authentication handlers (login, signup)

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use forgegate_types::Principal;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Verify credentials and establish a session
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload
        .map_err(|_| ApiError::BadRequest("Malformatted login request.".to_string()))?;

    let (principal, token) = state.auth.login(&req.email, &req.password).await?;
    let cookie = state.auth.session_cookie(&token);

    Ok(session_response(principal, cookie))
}

/// POST /api/auth/signup
///
/// Register a principal and establish a session
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload
        .map_err(|_| ApiError::BadRequest("Malformatted signup request.".to_string()))?;

    let (principal, token) = state
        .auth
        .signup(&req.name, &req.email, &req.password)
        .await?;
    let cookie = state.auth.session_cookie(&token);

    Ok(session_response(principal, cookie))
}

/// Single point for session cookie semantics. The hash never appears
/// in the body; the Principal's serde attributes exclude it.
fn session_response(principal: Principal, cookie: String) -> Response {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(principal),
    )
        .into_response()
}
