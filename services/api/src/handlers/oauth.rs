//! OAuth exchange handler

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use forgegate_types::{OAuthToken, VcsId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /api/oauth/vcs/{vcs_id}/exchange-oauth-token
///
/// Exchange the `code` header for a provider token. The stored client
/// secret stays server-side; an empty or missing code is forwarded
/// as-is and rejected by the provider.
pub async fn exchange_oauth_token(
    State(state): State<AppState>,
    Path(vcs_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<OAuthToken>> {
    let vcs_id = VcsId::parse(&vcs_id)
        .map_err(|_| ApiError::BadRequest(format!("invalid vcs id: {vcs_id}")))?;

    let code = headers
        .get("code")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let token = state.broker.exchange(vcs_id, code).await?;
    Ok(Json(token))
}
