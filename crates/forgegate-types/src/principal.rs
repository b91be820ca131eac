//! Principal identity types

use serde::{Deserialize, Serialize};

/// Unique principal identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrincipalId(pub i32);

/// Creator recorded on principals made through signup
pub const SYSTEM_BOT_ID: PrincipalId = PrincipalId(1);

impl PrincipalId {
    /// Parse a principal ID from a string
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Principal status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalStatus {
    Active,
    Invited,
}

/// Principal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    EndUser,
    SystemBot,
}

/// A user identity record
///
/// The identifier is immutable once assigned by the directory. The
/// password hash is opaque to everything except the credential hasher
/// and never leaves the server in a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub creator_id: PrincipalId,
    pub name: String,
    pub email: String,
    /// Stored PHC hash string, set exactly once at creation
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub status: PrincipalStatus,
    #[serde(rename = "type")]
    pub principal_type: PrincipalType,
}
