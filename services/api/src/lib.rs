//! Forgegate API
//!
//! HTTP surface over the auth core and the OAuth exchange broker.
//! The router is exposed so integration tests can drive the whole
//! app in-process.

use axum::routing::{get, post};
use axum::Router;

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/signup", post(handlers::signup))
        .route(
            "/api/oauth/vcs/{vcs_id}/exchange-oauth-token",
            post(handlers::exchange_oauth_token),
        )
        .with_state(state)
}
