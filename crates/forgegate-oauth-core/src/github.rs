//! GitHub OAuth dialect
//!
//! GitHub deviates from the usual shape in two ways: the token endpoint
//! answers errors with HTTP 200 plus an in-body `error` field, and it
//! only returns JSON when asked via the Accept header.

use async_trait::async_trait;
use forgegate_types::{OAuthExchange, OAuthToken};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ExchangeError;
use crate::provider::OAuthProvider;

/// GitHub dialect client
#[derive(Clone)]
pub struct GitHubProvider {
    client: reqwest::Client,
}

impl GitHubProvider {
    /// Create a new GitHub client on a shared HTTP client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Wire shape of GitHub's token endpoint response
#[derive(Debug, Deserialize)]
struct GitHubTokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    /// Dialect-only field, dropped during normalization
    #[allow(dead_code)]
    scope: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl GitHubTokenResponse {
    fn into_token(self) -> Result<OAuthToken, ExchangeError> {
        if let Some(err) = self.error {
            let detail = self.error_description.unwrap_or_default();
            return Err(ExchangeError::Provider(format!("{err}: {detail}")));
        }
        let access_token = self
            .access_token
            .ok_or_else(|| ExchangeError::Decode("response carries no access_token".to_string()))?;
        Ok(OAuthToken {
            access_token,
            refresh_token: None,
            expires_in: None,
            token_type: self.token_type,
        })
    }
}

#[async_trait]
impl OAuthProvider for GitHubProvider {
    async fn exchange_oauth_token(
        &self,
        instance_url: &str,
        exchange: &OAuthExchange,
        code: &str,
        redirect_url: &str,
    ) -> Result<OAuthToken, ExchangeError> {
        let url = format!(
            "{}/login/oauth/access_token",
            instance_url.trim_end_matches('/')
        );
        debug!(url = %url, "exchanging authorization code with GitHub");

        let form = [
            ("client_id", exchange.client_id.as_str()),
            ("client_secret", exchange.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", redirect_url),
        ];

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "GitHub token request failed");
                ExchangeError::Request(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "GitHub token endpoint error");
            return Err(ExchangeError::Provider(format!(
                "GitHub token endpoint returned {status}"
            )));
        }

        let wire: GitHubTokenResponse = response.json().await.map_err(|e| {
            error!(error = %e, "failed to decode GitHub token response");
            ExchangeError::Decode(e.to_string())
        })?;

        wire.into_token().map_err(|e| {
            error!(error = %e, "GitHub reported exchange failure");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_drops_scope() {
        let raw = r#"{
            "access_token": "gho_token",
            "token_type": "bearer",
            "scope": "repo,gist"
        }"#;
        let wire: GitHubTokenResponse = serde_json::from_str(raw).unwrap();
        let token = wire.into_token().unwrap();

        assert_eq!(token.access_token, "gho_token");
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
        assert_eq!(token.refresh_token, None);

        let json = serde_json::to_string(&token).unwrap();
        assert!(!json.contains("scope"));
    }

    #[test]
    fn test_in_body_error_is_provider_failure() {
        let raw = r#"{
            "error": "bad_verification_code",
            "error_description": "The code passed is incorrect or expired."
        }"#;
        let wire: GitHubTokenResponse = serde_json::from_str(raw).unwrap();
        let err = wire.into_token().unwrap_err();
        assert!(matches!(err, ExchangeError::Provider(_)));
        assert!(err.to_string().contains("bad_verification_code"));
    }

    #[test]
    fn test_missing_access_token_is_decode_failure() {
        let wire: GitHubTokenResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            wire.into_token().unwrap_err(),
            ExchangeError::Decode(_)
        ));
    }
}
