//! Authorization-code exchange broker
//!
//! Looks up the VCS connection, picks the dialect client for its
//! provider type, and runs the code-for-token exchange. The stored
//! application credentials never leave the server; the caller only
//! supplies the connection id and the single-use code.

use std::sync::Arc;

use forgegate_store::{StoreError, VcsStore};
use forgegate_types::{OAuthExchange, OAuthToken, VcsId};
use tracing::{debug, error};

use crate::config::BrokerConfig;
use crate::error::BrokerError;
use crate::provider::ProviderResolver;

/// Brokers OAuth code exchange for registered VCS connections
pub struct OAuthBroker<V, R> {
    store: Arc<V>,
    resolver: R,
    config: BrokerConfig,
}

impl<V, R> OAuthBroker<V, R>
where
    V: VcsStore,
    R: ProviderResolver,
{
    /// Create a new broker
    pub fn new(store: Arc<V>, resolver: R, config: BrokerConfig) -> Self {
        Self {
            store,
            resolver,
            config,
        }
    }

    /// Exchange an authorization code for a normalized token.
    ///
    /// # Errors
    /// `VcsNotFound` when no connection has the id, `UnsupportedProvider`
    /// when the connection's type has no dialect client, `ExchangeFailed`
    /// when the external host rejects or the request fails.
    pub async fn exchange(&self, vcs_id: VcsId, code: &str) -> Result<OAuthToken, BrokerError> {
        let vcs = self
            .store
            .find_by_id(vcs_id)
            .await
            .map_err(|e: StoreError| {
                error!(error = %e, vcs_id = %vcs_id, "vcs lookup failed");
                BrokerError::Store(e.to_string())
            })?
            .ok_or(BrokerError::VcsNotFound)?;

        let provider = self.resolver.resolve(vcs.provider_type)?;

        let exchange = OAuthExchange {
            client_id: vcs.application_id.clone(),
            client_secret: vcs.secret.clone(),
        };
        let redirect_url = self.config.redirect_url();

        debug!(vcs_id = %vcs_id, provider = %vcs.provider_type, "exchanging authorization code");

        provider
            .exchange_oauth_token(&vcs.instance_url, &exchange, code, &redirect_url)
            .await
            .map_err(|e| {
                error!(error = %e, vcs_id = %vcs_id, "oauth exchange failed");
                BrokerError::ExchangeFailed(e.to_string())
            })
    }
}
