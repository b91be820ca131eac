//! HTTP handlers

mod auth;
mod health;
mod oauth;

pub use auth::{login, signup};
pub use health::healthz;
pub use oauth::exchange_oauth_token;
