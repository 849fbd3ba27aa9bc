//! Domain errors

use thiserror::Error;

/// Domain-level error types
///
/// Absence of a record is not an error here: repository lookups return
/// `Option` and the HTTP layer decides what a missing user means.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Storage/database failure (connectivity, constraint, decoding)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
