//! In-memory store implementations

use std::collections::HashMap;

use async_trait::async_trait;
use forgegate_types::{Principal, PrincipalId, VcsConnection, VcsId, SYSTEM_BOT_ID};
use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::principal::{CreatePrincipal, PrincipalStore};
use crate::vcs::VcsStore;

/// In-memory principal directory
///
/// The write lock around `create` makes the uniqueness check atomic
/// with the insert, so concurrent signups for one email see exactly
/// one success and one conflict.
pub struct MemoryPrincipalStore {
    inner: RwLock<PrincipalMap>,
}

struct PrincipalMap {
    by_id: HashMap<PrincipalId, Principal>,
    next_id: i32,
}

impl MemoryPrincipalStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PrincipalMap {
                by_id: HashMap::new(),
                next_id: SYSTEM_BOT_ID.0 + 1,
            }),
        }
    }
}

impl Default for MemoryPrincipalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalStore for MemoryPrincipalStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Principal>> {
        let map = self.inner.read();
        Ok(map.by_id.values().find(|p| p.email == email).cloned())
    }

    async fn create(&self, create: CreatePrincipal) -> StoreResult<Principal> {
        let mut map = self.inner.write();
        if map.by_id.values().any(|p| p.email == create.email) {
            return Err(StoreError::Conflict);
        }

        let id = PrincipalId(map.next_id);
        map.next_id += 1;

        let principal = Principal {
            id,
            creator_id: create.creator_id,
            name: create.name,
            email: create.email,
            password_hash: create.password_hash,
            status: create.status,
            principal_type: create.principal_type,
        };
        map.by_id.insert(id, principal.clone());
        Ok(principal)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.inner.read().by_id.len())
    }
}

/// In-memory VCS registry
#[derive(Default)]
pub struct MemoryVcsStore {
    inner: RwLock<HashMap<VcsId, VcsConnection>>,
}

impl MemoryVcsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection (builder form for seeding)
    pub fn with_connection(self, vcs: VcsConnection) -> Self {
        self.inner.write().insert(vcs.id, vcs);
        self
    }

    /// Register a connection
    pub fn insert(&self, vcs: VcsConnection) {
        self.inner.write().insert(vcs.id, vcs);
    }
}

#[async_trait]
impl VcsStore for MemoryVcsStore {
    async fn find_by_id(&self, id: VcsId) -> StoreResult<Option<VcsConnection>> {
        Ok(self.inner.read().get(&id).cloned())
    }
}
