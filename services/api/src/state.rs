//! Application state

use std::sync::Arc;

use forgegate_auth_core::AuthService;
use forgegate_oauth_core::{OAuthBroker, ProviderResolver};
use forgegate_store::{MemoryPrincipalStore, MemoryVcsStore};

use crate::config::Config;

/// Auth service over the in-memory principal directory
pub type AuthServiceImpl = AuthService<MemoryPrincipalStore>;

/// Broker over the in-memory VCS registry; the resolver stays dynamic
/// so tests can substitute stub providers
pub type OAuthBrokerImpl = OAuthBroker<MemoryVcsStore, Arc<dyn ProviderResolver>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for credential checks and session issuance
    pub auth: Arc<AuthServiceImpl>,
    /// OAuth broker for authorization-code exchange
    pub broker: Arc<OAuthBrokerImpl>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthServiceImpl, broker: OAuthBrokerImpl, config: Config) -> Self {
        Self {
            auth: Arc::new(auth),
            broker: Arc::new(broker),
            config: Arc::new(config),
        }
    }
}
