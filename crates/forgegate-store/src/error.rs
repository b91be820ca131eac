//! Store errors

use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique key already taken
    #[error("conflict")]
    Conflict,

    /// Record not found
    #[error("record not found")]
    NotFound,

    /// Backend failure
    #[error("store error: {0}")]
    Internal(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
