//! Forgegate Types - Shared domain types
//!
//! Domain types used across Forgegate crates:
//! - Principal identity records
//! - VCS connection configuration
//! - OAuth exchange shapes

pub mod oauth;
pub mod principal;
pub mod vcs;

pub use oauth::*;
pub use principal::*;
pub use vcs::*;
