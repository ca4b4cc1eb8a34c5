//! Key wrappers for the label store trees
//!
//! The `files` tree is keyed by bincode-encoded paths, the `labels`
//! reverse-index tree by raw label bytes. These wrappers keep the encoding
//! in one place instead of at every call site.

use super::error::StoreError;
use std::path::{Path, PathBuf};

/// Key for the `files` tree: a bincode-encoded path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathKey(pub PathBuf);

impl PathKey {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(path.as_ref().to_path_buf())
    }

    /// # Errors
    /// Returns `StoreError` if the bytes do not decode to a path.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let (path, _): (PathBuf, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(Self(path))
    }

    #[must_use]
    pub fn into_inner(self) -> PathBuf {
        self.0
    }
}

impl TryFrom<PathKey> for Vec<u8> {
    type Error = StoreError;

    fn try_from(key: PathKey) -> Result<Self, Self::Error> {
        Ok(bincode::encode_to_vec(&key.0, bincode::config::standard())?)
    }
}

impl AsRef<Path> for PathKey {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Key for the `labels` reverse-index tree: the label's UTF-8 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelKey(String);

impl LabelKey {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// # Errors
    /// Returns `StoreError` if the key bytes are not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        String::from_utf8(bytes.to_vec())
            .map(Self)
            .map_err(|_| StoreError::InvalidInput("Label key is not valid UTF-8".into()))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for LabelKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
