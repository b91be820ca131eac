//! Provider dialect dispatch
//!
//! Each dialect client translates its host's wire shape (token
//! endpoint path, request encoding, response field names) into the
//! normalized `OAuthToken`. This is the only place dialect differences
//! exist; callers above never branch on provider type. Adding a host
//! means adding one client here, never touching the broker.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use forgegate_types::{OAuthExchange, OAuthToken, VcsProviderType};

use crate::error::{BrokerError, ExchangeError};
use crate::github::GitHubProvider;
use crate::gitlab::GitLabProvider;

/// Capability every dialect client implements
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Trade an authorization code for a normalized token
    async fn exchange_oauth_token(
        &self,
        instance_url: &str,
        exchange: &OAuthExchange,
        code: &str,
        redirect_url: &str,
    ) -> Result<OAuthToken, ExchangeError>;
}

impl std::fmt::Debug for dyn OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OAuthProvider")
    }
}

/// Maps a provider type tag to its dialect client
pub trait ProviderResolver: Send + Sync {
    /// # Errors
    /// `BrokerError::UnsupportedProvider` when no client exists for the
    /// tag.
    fn resolve(
        &self,
        provider_type: VcsProviderType,
    ) -> Result<Arc<dyn OAuthProvider>, BrokerError>;
}

impl<T: ProviderResolver + ?Sized> ProviderResolver for Arc<T> {
    fn resolve(
        &self,
        provider_type: VcsProviderType,
    ) -> Result<Arc<dyn OAuthProvider>, BrokerError> {
        (**self).resolve(provider_type)
    }
}

/// Production resolver backed by one shared HTTP client
#[derive(Clone)]
pub struct HttpProviderResolver {
    gitlab: Arc<GitLabProvider>,
    github: Arc<GitHubProvider>,
}

impl HttpProviderResolver {
    /// Create a resolver with a pooled client. Timeouts fail fast so a
    /// stalled host cannot pin a worker; dropping the caller's task
    /// cancels an in-flight exchange.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            gitlab: Arc::new(GitLabProvider::new(client.clone())),
            github: Arc::new(GitHubProvider::new(client)),
        }
    }
}

impl Default for HttpProviderResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderResolver for HttpProviderResolver {
    fn resolve(
        &self,
        provider_type: VcsProviderType,
    ) -> Result<Arc<dyn OAuthProvider>, BrokerError> {
        match provider_type {
            VcsProviderType::GitLabSelfHost => {
                Ok(Arc::clone(&self.gitlab) as Arc<dyn OAuthProvider>)
            }
            VcsProviderType::GitHubCom => Ok(Arc::clone(&self.github) as Arc<dyn OAuthProvider>),
            // Recognized in configuration but no dialect client yet
            VcsProviderType::BitbucketCloud => {
                Err(BrokerError::UnsupportedProvider(provider_type))
            }
        }
    }
}
