//! Search-specific error types

use crate::store::StoreError;
use thiserror::Error;

/// Errors raised while running a label search
///
/// Cancellation is not an error; it is a terminal outcome of the search
/// (see [`crate::search::SearchOutcome`]).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search index could not be read
    #[error("Search index error: {0}")]
    IndexError(#[from] StoreError),

    /// The background worker terminated without delivering an outcome
    #[error("Search worker terminated without delivering a result")]
    WorkerGone,
}
