//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A history limit of zero would discard every record.
    #[error("history limit must be at least 1")]
    InvalidHistoryLimit,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
