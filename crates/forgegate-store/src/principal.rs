//! Principal directory trait

use async_trait::async_trait;
use forgegate_types::{Principal, PrincipalId, PrincipalStatus, PrincipalType};

use crate::error::StoreResult;

/// Create principal input
#[derive(Debug, Clone)]
pub struct CreatePrincipal {
    pub creator_id: PrincipalId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub status: PrincipalStatus,
    pub principal_type: PrincipalType,
}

/// Principal directory
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    /// Find a principal by email
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Principal>>;

    /// Create a new principal.
    ///
    /// Email uniqueness is enforced here; a duplicate yields
    /// `StoreError::Conflict`. This check is the sole arbiter for
    /// concurrent signups against the same email.
    async fn create(&self, create: CreatePrincipal) -> StoreResult<Principal>;

    /// Number of principals in the directory
    async fn count(&self) -> StoreResult<usize>;
}
