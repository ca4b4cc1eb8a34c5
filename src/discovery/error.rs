//! Discovery-specific error types

use crate::store::StoreError;
use thiserror::Error;

/// Errors raised during known-tag discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The discovery read requires an unrestricted execution context
    #[error("Known-tag discovery is not available from a sandboxed environment")]
    RestrictedEnvironment,

    /// The label store could not be read
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// The Finder preferences property list could not be read or parsed
    #[error("Failed to read Finder preferences: {0}")]
    PlistError(#[from] plist::Error),
}
