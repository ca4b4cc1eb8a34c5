//! Store-specific error types
//!
//! Failures from the embedded label store: the underlying sled database,
//! value encoding/decoding, and rejected writes. Rejected writes carry the
//! path they were for, so batch persistence can report per-file outcomes.

use thiserror::Error;

/// Label store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Store error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding stored labels: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding labels: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// The store rejected a write for one path
    #[error("Failed to write labels for '{path}': {reason}")]
    WriteFailed { path: String, reason: String },

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
