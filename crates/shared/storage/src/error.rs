//! Storage errors.

use thiserror::Error;

/// Errors reported by a `UserStore`.
///
/// Both kinds are expected outcomes of a lookup or write, not failures of the
/// store itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No live record has the requested identifier or username
    #[error("not found")]
    NotFound,

    /// The write would give two live records the same username
    #[error("already exists")]
    AlreadyExists,
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
