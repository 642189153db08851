//! Error types

use thiserror::Error;

/// Errors raised by the ranking engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzError {
    /// Unknown search mode or malformed configuration document.
    /// Only raised while building an engine, never mid-search.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Search abandoned through its cancellation flag
    #[error("search cancelled")]
    Cancelled,

    /// Request document could not be parsed (JSON entry point only)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for engine operations
pub type FuzzResult<T> = Result<T, FuzzError>;
