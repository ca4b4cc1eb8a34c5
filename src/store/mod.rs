//! Embedded label store
//!
//! Persists the flattened label string set for each file using sled as the
//! embedded database backend. The store deliberately does not distinguish
//! color labels from free tags; that partition is reconstructed by
//! [`crate::labels::LabelSet`] against a color table at load time.
//!
//! Uses two sled trees:
//! - `files`: path -> label set (the system of record)
//! - `labels`: label -> paths reverse index, maintained on every write,
//!   for label enumeration and discovery

use sled::{Db, Tree};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub mod error;
pub mod types;

pub use error::StoreError;
pub use types::{LabelKey, PathKey};

/// Persistence contract for flattened label sets
///
/// The label model and search depend on this trait rather than on the sled
/// backend directly, so tests can substitute an in-memory store.
pub trait LabelStore {
    /// The persisted label set for one path, or `None` if the path has no entry
    ///
    /// # Errors
    /// Returns `StoreError` if the read or decode fails.
    fn get(&self, path: &Path) -> Result<Option<BTreeSet<String>>, StoreError>;

    /// Replace the persisted label set for one path
    ///
    /// Writing an empty set removes the entry entirely.
    ///
    /// # Errors
    /// Returns `StoreError::WriteFailed` if the store rejects the write.
    fn set(&self, path: &Path, labels: &BTreeSet<String>) -> Result<(), StoreError>;

    /// Every (path, label set) entry in the store
    ///
    /// # Errors
    /// Returns `StoreError` if enumeration or decoding fails.
    fn entries(&self) -> Result<Vec<(PathBuf, BTreeSet<String>)>, StoreError>;
}

/// Sled-backed label store
///
/// All operations keep the `labels` reverse index consistent with the
/// `files` tree.
pub struct Database {
    db: Db,
    files: Tree,  // path -> labels
    labels: Tree, // label -> paths reverse index
}

impl Database {
    /// Opens or creates a label database at the specified path
    ///
    /// # Errors
    /// Returns `StoreError` if the database cannot be opened or the
    /// internal trees cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let files = db.open_tree("files")?;
        let labels = db.open_tree("labels")?;
        Ok(Self { db, files, labels })
    }

    /// Remove a path and its labels from the store
    ///
    /// # Returns
    /// `true` if an entry existed.
    ///
    /// # Errors
    /// Returns `StoreError` if database operations fail.
    pub fn remove<P: AsRef<Path>>(&self, path: P) -> Result<bool, StoreError> {
        let path = path.as_ref();
        if let Some(old) = self.get(path)? {
            self.remove_from_index(path, &old)?;
        }

        let key: Vec<u8> = PathKey::new(path).try_into()?;
        Ok(self.files.remove(key.as_slice())?.is_some())
    }

    /// Check whether a path has an entry in the store
    ///
    /// # Errors
    /// Returns `StoreError` if the key cannot be encoded or the read fails.
    pub fn contains<P: AsRef<Path>>(&self, path: P) -> Result<bool, StoreError> {
        let key: Vec<u8> = PathKey::new(path).try_into()?;
        Ok(self.files.contains_key(key.as_slice())?)
    }

    /// Number of labelled paths in the store
    #[must_use]
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// All paths carrying the given label, via the reverse index
    ///
    /// # Errors
    /// Returns `StoreError` if the index read or decode fails.
    pub fn find_by_label(&self, label: &str) -> Result<Vec<PathBuf>, StoreError> {
        match self.labels.get(LabelKey::new(label).as_bytes())? {
            Some(value) => {
                let (paths, _): (Vec<PathBuf>, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(paths)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Every distinct label in the store, sorted
    ///
    /// # Errors
    /// Returns `StoreError` if index iteration fails.
    pub fn list_all_labels(&self) -> Result<Vec<String>, StoreError> {
        let mut out = Vec::new();
        for result in &self.labels {
            let (key, _) = result?;
            out.push(LabelKey::from_bytes(&key)?.into_string());
        }
        out.sort();
        Ok(out)
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    /// Returns `StoreError` if the flush fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove every entry from the store
    ///
    /// # Errors
    /// Returns `StoreError` if clearing either tree fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.files.clear()?;
        self.labels.clear()?;
        Ok(())
    }

    fn add_to_index(&self, path: &Path, labels: &BTreeSet<String>) -> Result<(), StoreError> {
        for label in labels {
            let key = LabelKey::new(label.clone());
            let mut paths = self.find_by_label(key.as_ref())?;
            if !paths.contains(&path.to_path_buf()) {
                paths.push(path.to_path_buf());
            }
            let value = bincode::encode_to_vec(&paths, bincode::config::standard())?;
            self.labels.insert(key.as_bytes(), value)?;
        }
        Ok(())
    }

    fn remove_from_index(&self, path: &Path, labels: &BTreeSet<String>) -> Result<(), StoreError> {
        for label in labels {
            let key = LabelKey::new(label.clone());
            let mut paths = self.find_by_label(key.as_ref())?;
            paths.retain(|p| p != path);
            if paths.is_empty() {
                self.labels.remove(key.as_bytes())?;
            } else {
                let value = bincode::encode_to_vec(&paths, bincode::config::standard())?;
                self.labels.insert(key.as_bytes(), value)?;
            }
        }
        Ok(())
    }
}

impl LabelStore for Database {
    fn get(&self, path: &Path) -> Result<Option<BTreeSet<String>>, StoreError> {
        let key: Vec<u8> = PathKey::new(path).try_into()?;

        match self.files.get(key.as_slice())? {
            Some(value) => {
                let (labels, _): (Vec<String>, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(Some(labels.into_iter().collect()))
            }
            None => Ok(None),
        }
    }

    fn set(&self, path: &Path, labels: &BTreeSet<String>) -> Result<(), StoreError> {
        if let Some(old) = self.get(path)? {
            self.remove_from_index(path, &old)?;
        }

        if labels.is_empty() {
            let key: Vec<u8> = PathKey::new(path).try_into()?;
            self.files.remove(key.as_slice())?;
            return Ok(());
        }

        let key: Vec<u8> = PathKey::new(path).try_into()?;
        let flat: Vec<String> = labels.iter().cloned().collect();
        let value = bincode::encode_to_vec(&flat, bincode::config::standard())?;
        self.files
            .insert(key, value)
            .map_err(|e| StoreError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        self.add_to_index(path, labels)
    }

    fn entries(&self) -> Result<Vec<(PathBuf, BTreeSet<String>)>, StoreError> {
        let mut out = Vec::new();
        for result in &self.files {
            let (key, value) = result?;
            let path = PathKey::from_bytes(&key)?.into_inner();
            let (labels, _): (Vec<String>, usize) =
                bincode::decode_from_slice(&value, bincode::config::standard())?;
            out.push((path, labels.into_iter().collect()));
        }
        Ok(out)
    }
}
