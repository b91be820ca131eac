//! Broker errors

use forgegate_types::VcsProviderType;
use thiserror::Error;

/// Provider-internal exchange failure (network, protocol, decode).
/// The broker folds every variant into `BrokerError::ExchangeFailed`;
/// the distinction exists for logging only.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("provider request failed: {0}")]
    Request(String),

    #[error("provider returned error: {0}")]
    Provider(String),

    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

/// Broker errors
#[derive(Error, Debug)]
pub enum BrokerError {
    /// Referenced VCS connection absent
    #[error("vcs connection not found")]
    VcsNotFound,

    /// Provider type has no dialect client. The tag comes from trusted
    /// stored configuration, so this is an internal inconsistency, not
    /// caller error.
    #[error("unsupported provider type: {0}")]
    UnsupportedProvider(VcsProviderType),

    /// Exchange with the external host failed
    #[error("oauth exchange failed: {0}")]
    ExchangeFailed(String),

    /// Registry failure
    #[error("store error: {0}")]
    Store(String),
}

impl BrokerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::VcsNotFound => 404,
            Self::UnsupportedProvider(_) | Self::ExchangeFailed(_) | Self::Store(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::VcsNotFound => "VCS_NOT_FOUND",
            Self::UnsupportedProvider(_) => "UNSUPPORTED_PROVIDER",
            Self::ExchangeFailed(_) => "EXCHANGE_FAILED",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}
