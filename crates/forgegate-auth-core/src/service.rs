//! Auth service - login and signup orchestration
//!
//! Login and signup differ only in how the credential is acquired
//! (verify vs. create); both funnel through one token-issuing tail so
//! cookie semantics cannot diverge between the two paths.

use std::sync::Arc;

use forgegate_store::{CreatePrincipal, PrincipalStore, StoreError};
use forgegate_types::{Principal, PrincipalStatus, PrincipalType, SYSTEM_BOT_ID};

use crate::config::AuthConfig;
use crate::crypto::SigningKeyError;
use crate::error::AuthError;
use crate::password::CredentialHasher;
use crate::token::{SessionClaims, SessionToken, TokenError, TokenIssuer};

/// Authentication service
///
/// Stateless per call; the directory owns its own consistency. No
/// retries: a transient failure surfaces immediately and the client
/// may retry.
pub struct AuthService<P: PrincipalStore> {
    hasher: CredentialHasher,
    issuer: TokenIssuer,
    store: Arc<P>,
}

impl<P: PrincipalStore> AuthService<P> {
    /// Create a new auth service with the deployment hashing cost.
    ///
    /// # Errors
    /// Fails when the session secret does not satisfy the signing key
    /// policy.
    pub fn new(config: &AuthConfig, store: Arc<P>) -> Result<Self, SigningKeyError> {
        Self::with_hasher(config, store, CredentialHasher::new())
    }

    /// Create a service with an explicit hasher (tests use cheap
    /// parameters to keep property runs fast)
    pub fn with_hasher(
        config: &AuthConfig,
        store: Arc<P>,
        hasher: CredentialHasher,
    ) -> Result<Self, SigningKeyError> {
        Ok(Self {
            hasher,
            issuer: TokenIssuer::new(config)?,
            store,
        })
    }

    /// Verify credentials and issue a session token
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Principal, SessionToken), AuthError> {
        let principal = match self.store.find_by_email(email).await {
            Ok(Some(p)) => p,
            // An unknown account answers exactly like a bad password
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!(error = %e, "principal lookup failed");
                return Err(AuthError::Store(e.to_string()));
            }
        };

        match self.hasher.verify(&principal.password_hash, password) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("password mismatch");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "password verification failed");
                return Err(AuthError::Hashing(e.to_string()));
            }
        }

        self.issue_for(principal)
    }

    /// Hash the password, create the principal with fixed defaults,
    /// and issue a session token
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(Principal, SessionToken), AuthError> {
        let password_hash = self.hasher.hash(password).map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AuthError::Hashing(e.to_string())
        })?;

        let create = CreatePrincipal {
            creator_id: SYSTEM_BOT_ID,
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            status: PrincipalStatus::Active,
            principal_type: PrincipalType::EndUser,
        };

        let principal = match self.store.create(create).await {
            Ok(p) => p,
            Err(StoreError::Conflict) => return Err(AuthError::Conflict),
            Err(e) => {
                tracing::error!(error = %e, "principal creation failed");
                return Err(AuthError::Store(e.to_string()));
            }
        };

        self.issue_for(principal)
    }

    /// Shared tail: bind a fresh token to the authenticated principal
    fn issue_for(&self, principal: Principal) -> Result<(Principal, SessionToken), AuthError> {
        let token = self.issuer.issue(principal.id).map_err(|e| {
            tracing::error!(error = %e, "token issuance failed");
            AuthError::TokenIssuance(e.to_string())
        })?;
        Ok((principal, token))
    }

    /// Cookie value carrying an issued token
    pub fn session_cookie(&self, token: &SessionToken) -> String {
        self.issuer.cookie(token)
    }

    /// Verify a presented session token
    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.issuer.verify(token)
    }
}

impl<P: PrincipalStore> std::fmt::Debug for AuthService<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}
