//! VCS connection configuration types

use serde::{Deserialize, Serialize};

/// Unique identifier of a configured VCS connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VcsId(pub i32);

impl VcsId {
    /// Parse a VCS ID from a string (path segments arrive as text)
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }
}

impl std::fmt::Display for VcsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider type tag of a configured VCS host
///
/// A closed set: adding a host means adding a variant here plus one
/// dialect client in the OAuth core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcsProviderType {
    #[serde(rename = "GITLAB_SELF_HOST")]
    GitLabSelfHost,
    #[serde(rename = "GITHUB_COM")]
    GitHubCom,
    #[serde(rename = "BITBUCKET_CLOUD")]
    BitbucketCloud,
}

impl std::fmt::Display for VcsProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::GitLabSelfHost => "GITLAB_SELF_HOST",
            Self::GitHubCom => "GITHUB_COM",
            Self::BitbucketCloud => "BITBUCKET_CLOUD",
        };
        f.write_str(tag)
    }
}

/// A configured external VCS host integration
///
/// Read-only from the auth/exchange core's perspective; owned by the
/// VCS registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcsConnection {
    pub id: VcsId,
    pub name: String,
    pub provider_type: VcsProviderType,
    /// Base URL of the host instance, e.g. `https://gitlab.example.com`
    pub instance_url: String,
    /// OAuth application (client) ID registered on the host
    pub application_id: String,
    /// OAuth client secret, never serialized into responses
    #[serde(skip_serializing, default)]
    pub secret: String,
}
