//! Forgegate Auth Core - credential verification and session issuance
//!
//! Password hashing policy, signed session tokens with cookie
//! transport, and the login/signup orchestration on top of a principal
//! directory.

pub mod config;
pub mod crypto;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use crypto::{constant_time_eq, SigningKey, SigningKeyError};
pub use error::AuthError;
pub use password::{CredentialHasher, HashError};
pub use service::AuthService;
pub use token::{SessionClaims, SessionToken, TokenError, TokenIssuer, SESSION_COOKIE_NAME};
