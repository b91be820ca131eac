//! Forgegate OAuth Core - authorization-code exchange with VCS hosts
//!
//! A broker looks up a configured VCS connection, resolves the dialect
//! client for its provider type, and normalizes the exchanged token.
//! This flow authorizes a connection, not a user session.

pub mod broker;
pub mod config;
pub mod error;
pub mod github;
pub mod gitlab;
pub mod provider;

pub use broker::OAuthBroker;
pub use config::BrokerConfig;
pub use error::{BrokerError, ExchangeError};
pub use github::GitHubProvider;
pub use gitlab::GitLabProvider;
pub use provider::{HttpProviderResolver, OAuthProvider, ProviderResolver};
