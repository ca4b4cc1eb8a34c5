//! Testing utilities for labelr
//!
//! Helper types for writing tests: a temporary sled database wrapper and
//! an in-memory [`LabelStore`] with injectable write failures.
//!
//! Only available when compiled with `cfg(test)`.

use crate::store::{Database, LabelStore, StoreError};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// A sled database in a temporary directory, removed on drop
///
/// # Examples
/// ```ignore
/// let test_db = TestDb::new();
/// let db = test_db.db();
/// db.set(Path::new("a.txt"), &labels).unwrap();
/// ```
pub struct TestDb {
    // Held for its Drop; the directory lives as long as the database
    _dir: TempDir,
    db: Database,
}

impl TestDb {
    /// Create a fresh database in a unique temporary directory
    ///
    /// # Panics
    /// Panics if the directory or database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir for test database");
        let db = Database::open(dir.path().join("labels-db")).expect("Failed to open test database");
        Self { _dir: dir, db }
    }

    /// The wrapped database
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory [`LabelStore`] for model and search tests
///
/// Writes to paths registered via [`MemoryStore::fail_writes_for`] are
/// rejected with `StoreError::WriteFailed`, for exercising best-effort
/// batch persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<PathBuf, BTreeSet<String>>>,
    failing: Mutex<HashSet<PathBuf>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write to `path` fail
    pub fn fail_writes_for(&self, path: impl AsRef<Path>) {
        self.failing
            .lock()
            .expect("failing set poisoned")
            .insert(path.as_ref().to_path_buf());
    }
}

impl LabelStore for MemoryStore {
    fn get(&self, path: &Path) -> Result<Option<BTreeSet<String>>, StoreError> {
        Ok(self
            .entries
            .lock()
            .expect("entries poisoned")
            .get(path)
            .cloned())
    }

    fn set(&self, path: &Path, labels: &BTreeSet<String>) -> Result<(), StoreError> {
        if self
            .failing
            .lock()
            .expect("failing set poisoned")
            .contains(path)
        {
            return Err(StoreError::WriteFailed {
                path: path.display().to_string(),
                reason: "write rejected by test store".into(),
            });
        }

        let mut entries = self.entries.lock().expect("entries poisoned");
        if labels.is_empty() {
            entries.remove(path);
        } else {
            entries.insert(path.to_path_buf(), labels.clone());
        }
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(PathBuf, BTreeSet<String>)>, StoreError> {
        Ok(self
            .entries
            .lock()
            .expect("entries poisoned")
            .iter()
            .map(|(path, labels)| (path.clone(), labels.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_starts_empty() {
        let test_db = TestDb::new();
        assert_eq!(test_db.db().count(), 0);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let labels: BTreeSet<String> = ["Red".to_string()].into_iter().collect();

        store.set(Path::new("a.txt"), &labels).unwrap();
        assert_eq!(store.get(Path::new("a.txt")).unwrap(), Some(labels));
        assert_eq!(store.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_memory_store_empty_set_removes() {
        let store = MemoryStore::new();
        let labels: BTreeSet<String> = ["Red".to_string()].into_iter().collect();

        store.set(Path::new("a.txt"), &labels).unwrap();
        store.set(Path::new("a.txt"), &BTreeSet::new()).unwrap();
        assert_eq!(store.get(Path::new("a.txt")).unwrap(), None);
    }

    #[test]
    fn test_memory_store_injected_failure() {
        let store = MemoryStore::new();
        store.fail_writes_for("locked.txt");

        let labels: BTreeSet<String> = ["Red".to_string()].into_iter().collect();
        let err = store.set(Path::new("locked.txt"), &labels).unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
    }
}
