//! Configuration types for the auth core

use std::time::Duration;

/// Default cookie path scope for issued session tokens
pub const DEFAULT_COOKIE_PATH: &str = "/api";

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for session signing (at least 32 bytes)
    pub session_secret: String,
    /// Session duration
    pub session_duration: Duration,
    /// Set the Secure attribute on session cookies; enable whenever the
    /// deployment serves encrypted transport
    pub cookie_secure: bool,
    /// Cookie path scope
    pub cookie_path: String,
}

impl AuthConfig {
    /// Create a new auth config with deployment defaults
    pub fn new(session_secret: impl Into<String>) -> Self {
        Self {
            session_secret: session_secret.into(),
            session_duration: Duration::from_secs(24 * 60 * 60), // 24 hours
            cookie_secure: true,
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
        }
    }

    /// Set session duration
    pub fn with_session_duration(mut self, duration: Duration) -> Self {
        self.session_duration = duration;
        self
    }

    /// Set the Secure cookie attribute
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }
}
