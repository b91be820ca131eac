//! VCS registry trait

use async_trait::async_trait;
use forgegate_types::{VcsConnection, VcsId};

use crate::error::StoreResult;

/// VCS registry
#[async_trait]
pub trait VcsStore: Send + Sync {
    /// Find a configured VCS connection by ID. At most one connection
    /// exists per identifier.
    async fn find_by_id(&self, id: VcsId) -> StoreResult<Option<VcsConnection>>;
}
