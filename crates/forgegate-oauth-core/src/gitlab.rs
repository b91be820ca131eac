//! GitLab self-managed OAuth dialect

use async_trait::async_trait;
use forgegate_types::{OAuthExchange, OAuthToken};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ExchangeError;
use crate::provider::OAuthProvider;

/// GitLab self-managed dialect client
#[derive(Clone)]
pub struct GitLabProvider {
    client: reqwest::Client,
}

impl GitLabProvider {
    /// Create a new GitLab client on a shared HTTP client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Wire shape of GitLab's token endpoint response
#[derive(Debug, Deserialize)]
struct GitLabTokenResponse {
    access_token: String,
    token_type: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
    /// Dialect-only field, dropped during normalization
    #[allow(dead_code)]
    created_at: Option<i64>,
}

impl From<GitLabTokenResponse> for OAuthToken {
    fn from(wire: GitLabTokenResponse) -> Self {
        OAuthToken {
            access_token: wire.access_token,
            refresh_token: wire.refresh_token,
            expires_in: wire.expires_in,
            token_type: wire.token_type,
        }
    }
}

#[async_trait]
impl OAuthProvider for GitLabProvider {
    async fn exchange_oauth_token(
        &self,
        instance_url: &str,
        exchange: &OAuthExchange,
        code: &str,
        redirect_url: &str,
    ) -> Result<OAuthToken, ExchangeError> {
        let url = format!("{}/oauth/token", instance_url.trim_end_matches('/'));
        debug!(url = %url, "exchanging authorization code with GitLab");

        let form = [
            ("client_id", exchange.client_id.as_str()),
            ("client_secret", exchange.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", redirect_url),
            ("grant_type", "authorization_code"),
        ];

        let response = self.client.post(&url).form(&form).send().await.map_err(|e| {
            error!(error = %e, "GitLab token request failed");
            ExchangeError::Request(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "GitLab token endpoint error");
            return Err(ExchangeError::Provider(format!(
                "GitLab token endpoint returned {status}"
            )));
        }

        let wire: GitLabTokenResponse = response.json().await.map_err(|e| {
            error!(error = %e, "failed to decode GitLab token response");
            ExchangeError::Decode(e.to_string())
        })?;

        Ok(wire.into())
    }
}
