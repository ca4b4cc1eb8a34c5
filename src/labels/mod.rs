//! The label model
//!
//! A [`LabelSet`] holds the color categories and free-text tags for one
//! file-like entity, and derives the flattened set of label strings that is
//! the only representation the store persists. The color table is supplied
//! at construction; the flattened projection is recomputed on every access
//! and never stored, so it cannot diverge from the underlying sets.

use crate::colors::{ColorIndex, ColorTable};
use crate::store::{LabelStore, StoreError};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Colors and tags attached to one file-like entity
///
/// Mutators are idempotent and chainable:
///
/// ```
/// use labelr::colors::{ColorIndex, ColorTable};
/// use labelr::labels::LabelSet;
/// use std::sync::Arc;
///
/// let table = Arc::new(ColorTable::finder_default());
/// let mut labels = LabelSet::new(table);
/// labels
///     .insert_color(ColorIndex::Red)
///     .insert_tag("Work");
/// assert_eq!(labels.all_labels().len(), 2);
/// ```
///
/// The model provides no internal locking; callers sharing one instance
/// across threads must serialize mutation themselves.
#[derive(Debug, Clone)]
pub struct LabelSet {
    colors: HashSet<ColorIndex>,
    tags: HashSet<String>,
    table: Arc<ColorTable>,
}

impl LabelSet {
    /// Create an empty label set using the given color table
    #[must_use]
    pub fn new(table: Arc<ColorTable>) -> Self {
        Self {
            colors: HashSet::new(),
            tags: HashSet::new(),
            table,
        }
    }

    /// Create a label set pre-populated with colors and tags
    #[must_use]
    pub fn with(
        table: Arc<ColorTable>,
        colors: impl IntoIterator<Item = ColorIndex>,
        tags: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            tags: tags.into_iter().collect(),
            table,
        }
    }

    /// Create a label set by partitioning a flattened label string set
    ///
    /// Strings matching a canonical color label become color memberships,
    /// everything else becomes a free tag.
    #[must_use]
    pub fn from_flattened(
        table: Arc<ColorTable>,
        labels: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut set = Self::new(table);
        for label in labels {
            match set.table.index_of_label(&label) {
                Some(color) => {
                    set.colors.insert(color);
                }
                None => {
                    set.tags.insert(label);
                }
            }
        }
        set
    }

    /// Create a label set by loading a path's entry from the store
    ///
    /// # Errors
    /// Returns `StoreError` if the store read fails.
    pub fn from_store(
        table: Arc<ColorTable>,
        store: &impl LabelStore,
        path: &Path,
    ) -> Result<Self, StoreError> {
        let mut set = Self::new(table);
        set.load(store, path)?;
        Ok(set)
    }

    /// The color table this set resolves labels against
    #[must_use]
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// The currently set color indexes
    #[must_use]
    pub fn colors(&self) -> &HashSet<ColorIndex> {
        &self.colors
    }

    /// The currently set free-text tags
    #[must_use]
    pub fn tags(&self) -> &HashSet<String> {
        &self.tags
    }

    /// Add a color; no-op if already present
    pub fn insert_color(&mut self, color: ColorIndex) -> &mut Self {
        self.colors.insert(color);
        self
    }

    /// Add several colors
    pub fn insert_colors(&mut self, colors: impl IntoIterator<Item = ColorIndex>) -> &mut Self {
        self.colors.extend(colors);
        self
    }

    /// Add a tag; no-op if already present
    pub fn insert_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add several tags
    pub fn insert_tags(&mut self, tags: impl IntoIterator<Item = String>) -> &mut Self {
        self.tags.extend(tags);
        self
    }

    /// Remove a color; no-op if absent
    pub fn remove_color(&mut self, color: ColorIndex) -> &mut Self {
        self.colors.remove(&color);
        self
    }

    /// Remove several colors
    pub fn remove_colors(&mut self, colors: impl IntoIterator<Item = ColorIndex>) -> &mut Self {
        for color in colors {
            self.colors.remove(&color);
        }
        self
    }

    /// Remove a tag; no-op if absent
    pub fn remove_tag(&mut self, tag: &str) -> &mut Self {
        self.tags.remove(tag);
        self
    }

    /// Remove several tags
    pub fn remove_tags<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for tag in tags {
            self.tags.remove(tag);
        }
        self
    }

    /// Replace the full color set
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = ColorIndex>) -> &mut Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Replace the full tag set
    pub fn set_tags(&mut self, tags: impl IntoIterator<Item = String>) -> &mut Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Clear all colors and tags
    pub fn clear(&mut self) -> &mut Self {
        self.colors.clear();
        self.tags.clear();
        self
    }

    /// Clear the colors only
    pub fn clear_colors(&mut self) -> &mut Self {
        self.colors.clear();
        self
    }

    /// Clear the tags only
    pub fn clear_tags(&mut self) -> &mut Self {
        self.tags.clear();
        self
    }

    /// Is the specified color set?
    #[must_use]
    pub fn has_color(&self, color: ColorIndex) -> bool {
        self.colors.contains(&color)
    }

    /// Is the specified tag set?
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// True when no colors and no tags are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.tags.is_empty()
    }

    /// The flattened label set: tags unioned with the canonical label of
    /// every set color
    ///
    /// Recomputed on each call. Colors without a table entry (notably
    /// `ColorIndex::None`) contribute nothing.
    #[must_use]
    pub fn all_labels(&self) -> BTreeSet<String> {
        let mut labels: BTreeSet<String> = self.tags.iter().cloned().collect();
        labels.extend(
            self.colors
                .iter()
                .filter_map(|&c| self.table.label(c))
                .map(String::from),
        );
        labels
    }

    /// Replace this set's contents with a path's persisted labels
    ///
    /// Each stored string that matches a canonical color label becomes a
    /// color membership; everything else becomes a free tag. A path with
    /// no entry loads as empty.
    ///
    /// Note the known ambiguity: a free tag whose text equals a canonical
    /// color label will come back as a color, not a tag.
    ///
    /// # Errors
    /// Returns `StoreError` if the store read fails.
    pub fn load(&mut self, store: &impl LabelStore, path: &Path) -> Result<&mut Self, StoreError> {
        self.clear();

        let Some(stored) = store.get(path)? else {
            return Ok(self);
        };

        let loaded = Self::from_flattened(Arc::clone(&self.table), stored);
        self.colors = loaded.colors;
        self.tags = loaded.tags;
        Ok(self)
    }

    /// Write the flattened label set to the store for one path
    ///
    /// # Errors
    /// Returns `StoreError` if the write is rejected.
    pub fn persist(&self, store: &impl LabelStore, path: &Path) -> Result<(), StoreError> {
        store.set(path, &self.all_labels())
    }

    /// Write the flattened label set to the store for every path in a batch
    ///
    /// Each write is independent and best-effort: one failure neither
    /// aborts the remaining writes nor rolls back earlier ones. The
    /// per-path outcome is returned in input order.
    pub fn persist_all(
        &self,
        store: &impl LabelStore,
        paths: &[PathBuf],
    ) -> Vec<(PathBuf, Result<(), StoreError>)> {
        let labels = self.all_labels();
        paths
            .iter()
            .map(|path| (path.clone(), store.set(path, &labels)))
            .collect()
    }
}
