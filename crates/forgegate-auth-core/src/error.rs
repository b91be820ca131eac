//! Auth errors

use thiserror::Error;

/// Message returned for any credential failure. Unknown email and
/// wrong password are deliberately indistinguishable to the caller.
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Incorrect email or password.";

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown account or wrong password
    #[error("{}", INVALID_CREDENTIAL_MESSAGE)]
    InvalidCredentials,

    /// Email already registered
    #[error("email already in use")]
    Conflict,

    /// Hashing subsystem failure
    #[error("hashing error: {0}")]
    Hashing(String),

    /// Token signing failure
    #[error("token issuance error: {0}")]
    TokenIssuance(String),

    /// Directory failure
    #[error("store error: {0}")]
    Store(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials => 401,
            Self::Conflict => 409,
            Self::Hashing(_) | Self::TokenIssuance(_) | Self::Store(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Conflict => "EMAIL_CONFLICT",
            Self::Hashing(_) => "HASHING_ERROR",
            Self::TokenIssuance(_) => "TOKEN_ISSUANCE_ERROR",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}
