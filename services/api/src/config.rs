//! Configuration for the API service.

use std::time::Duration;

use forgegate_auth_core::AuthConfig;
use forgegate_oauth_core::BrokerConfig;
use forgegate_types::VcsConnection;

/// API service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// OAuth broker configuration
    pub broker: BrokerConfig,

    /// VCS connections seeded into the registry at startup
    pub vcs_connections: Vec<VcsConnection>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Session secret (minimum 32 bytes)
        let session_secret =
            std::env::var("SESSION_SECRET").map_err(|_| ConfigError::Missing("SESSION_SECRET"))?;

        if session_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "SESSION_SECRET must be at least 32 characters",
            ));
        }

        // Session duration (default 24 hours)
        let session_duration_hours: u64 = std::env::var("SESSION_DURATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_DURATION_HOURS"))?;

        // Secure cookie attribute (default on; disable only for plain-HTTP dev)
        let cookie_secure = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        // Frontend origin for provider redirects
        let frontend_host =
            std::env::var("FRONTEND_HOST").unwrap_or_else(|_| "http://localhost".to_string());

        let frontend_port: u16 = std::env::var("FRONTEND_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("FRONTEND_PORT"))?;

        // VCS registry seed (optional JSON array)
        let vcs_connections = match std::env::var("VCS_CONNECTIONS") {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| ConfigError::VcsConnections(e.to_string()))?,
            Err(_) => Vec::new(),
        };

        let auth = AuthConfig::new(session_secret)
            .with_session_duration(Duration::from_secs(session_duration_hours * 3600))
            .with_cookie_secure(cookie_secure);

        Ok(Self {
            http_port,
            auth,
            broker: BrokerConfig::new(frontend_host, frontend_port),
            vcs_connections,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Invalid VCS_CONNECTIONS value: {0}")]
    VcsConnections(String),
}
