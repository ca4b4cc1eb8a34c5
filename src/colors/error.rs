//! Color-specific error types

use thiserror::Error;

/// Errors raised when working with color indexes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A raw numeric value outside the 0-7 color index range was supplied
    #[error("Invalid color index: {0} (expected 0-7)")]
    InvalidIndex(i64),
}
