//! OAuth exchange shapes

use serde::{Deserialize, Serialize};

/// Ephemeral client credential pair used for a single code exchange.
/// Constructed per exchange, never persisted.
#[derive(Debug, Clone)]
pub struct OAuthExchange {
    pub client_id: String,
    pub client_secret: String,
}

/// Normalized result of an authorization-code exchange
///
/// Every provider dialect maps its own wire shape into this one;
/// dialect-only fields are dropped at that boundary. Optionals are
/// omitted from the serialized form so the output carries exactly the
/// fields the provider yielded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}
