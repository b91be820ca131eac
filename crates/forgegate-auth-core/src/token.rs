//! Session token issuance and cookie transport
//!
//! A token is `payload_b64.signature_b64`: a JSON claims document,
//! base64url-encoded, HMAC-SHA256 signed. Issuing is pure apart from
//! the clock; attaching to a response happens through the cookie
//! string the caller sets as a header, which keeps token generation
//! unit-testable without an HTTP response object.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use forgegate_types::PrincipalId;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::crypto::{SigningKey, SigningKeyError};

/// Session cookie name, stable across requests
pub const SESSION_COOKIE_NAME: &str = "forgegate_session";

/// Signed claims carried by a session token.
/// Exactly one principal reference, expiry never before issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub principal_id: PrincipalId,
    /// Issue timestamp (seconds)
    pub issued: i64,
    /// Expiration timestamp (seconds)
    pub expires: i64,
}

impl SessionClaims {
    /// Check whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.expires
    }
}

/// An issued session token plus the claims it carries
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// Signed wire value, `payload_b64.signature_b64`
    pub value: String,
    pub claims: SessionClaims,
}

/// Token errors
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Malformed value or bad signature
    #[error("invalid token")]
    Invalid,

    /// Token has expired
    #[error("token expired")]
    Expired,

    /// Signing or serialization failed during issuance
    #[error("token issuance failed: {0}")]
    Issuance(String),
}

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    key: SigningKey,
    session_duration_secs: i64,
    cookie_secure: bool,
    cookie_path: String,
}

impl TokenIssuer {
    /// Create a new issuer from config.
    ///
    /// # Errors
    /// Fails when the configured secret is shorter than 32 bytes.
    pub fn new(config: &AuthConfig) -> Result<Self, SigningKeyError> {
        Ok(Self {
            key: SigningKey::new(&config.session_secret)?,
            session_duration_secs: config.session_duration.as_secs() as i64,
            cookie_secure: config.cookie_secure,
            cookie_path: config.cookie_path.clone(),
        })
    }

    /// Issue a token bound to one principal
    pub fn issue(&self, principal_id: PrincipalId) -> Result<SessionToken, TokenError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            principal_id,
            issued: now,
            expires: now + self.session_duration_secs,
        };

        let payload =
            serde_json::to_vec(&claims).map_err(|e| TokenError::Issuance(e.to_string()))?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);
        let signature = URL_SAFE_NO_PAD.encode(self.key.sign(payload_b64.as_bytes()));

        Ok(SessionToken {
            value: format!("{payload_b64}.{signature}"),
            claims,
        })
    }

    /// Verify a presented token value and return its claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let (payload_b64, signature_b64) = token.rsplit_once('.').ok_or(TokenError::Invalid)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Invalid)?;
        if !self.key.verify(payload_b64.as_bytes(), &signature) {
            tracing::debug!("session token signature mismatch");
            return Err(TokenError::Invalid);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Invalid)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Invalid)?;

        if claims.is_expired() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Render the Set-Cookie value carrying this token.
    ///
    /// HttpOnly always; Secure when the deployment is configured for
    /// encrypted transport; scope restricted to the API path; lifetime
    /// bounded by the session duration.
    pub fn cookie(&self, token: &SessionToken) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={}; HttpOnly; SameSite=Strict; Path={}; Max-Age={}",
            token.value, self.cookie_path, self.session_duration_secs,
        );
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("session_duration_secs", &self.session_duration_secs)
            .finish_non_exhaustive()
    }
}
