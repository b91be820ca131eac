//! Forgegate Store - collaborator interfaces for identity and VCS records
//!
//! Async repository traits for the principal directory and the VCS
//! registry, plus in-memory implementations. Persistent backends live
//! behind these traits and are out of scope for this core.

pub mod error;
pub mod memory;
pub mod principal;
pub mod vcs;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryPrincipalStore, MemoryVcsStore};
pub use principal::{CreatePrincipal, PrincipalStore};
pub use vcs::VcsStore;
