//! Labelr - Finder-style color and tag labels for files
//!
//! This library models the Finder's file labels: eight fixed color
//! categories plus free-text tags. A [`labels::LabelSet`] holds the colors
//! and tags for one file, persists its flattened label strings to an
//! embedded [`store::Database`], and drives one-shot cancellable
//! [`search::Search`]es with any/all/exact match modes.
//!
//! The color table mapping indexes to canonical labels is explicit data
//! ([`colors::ColorTable`]), constructed once and shared, so behavior is
//! deterministic across locales.

use thiserror::Error;

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod labels;
pub mod output;
pub mod search;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum LabelrError {
    /// Label store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Color index error
    #[error("Color error: {0}")]
    ColorError(#[from] colors::ColorError),
    /// Known-tag discovery error
    #[error("Discovery error: {0}")]
    DiscoveryError(#[from] discovery::DiscoveryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
