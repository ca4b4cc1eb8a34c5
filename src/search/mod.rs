//! Match-mode label search
//!
//! A search takes a target label set and a [`MatchMode`] and enumerates, in
//! the background, every path in the index whose persisted label set
//! satisfies the mode's predicate:
//!
//! | Mode    | Candidate set C matches target set T when |
//! |---------|-------------------------------------------|
//! | `Any`   | C and T share at least one label          |
//! | `All`   | C contains every label in T               |
//! | `Exact` | C equals T                                |
//!
//! Each search is one-shot: [`Search::spawn`] returns a [`SearchHandle`]
//! that resolves exactly once, either with the matching paths or with a
//! cancellation signal. Cancellation is a distinct terminal outcome so
//! callers can tell "cancelled" apart from "zero matches". Callers wanting
//! concurrent searches spawn independent handles.

pub mod error;

pub use error::SearchError;

use crate::labels::LabelSet;
use crate::store::{LabelStore, StoreError};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;

/// How a candidate's label set is compared against the target's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// At least one shared label
    #[default]
    Any,
    /// Candidate has every target label, and may have more
    All,
    /// Candidate's label set equals the target's exactly
    Exact,
}

/// Pure match-mode predicate over two flattened label sets
///
/// With an empty target, `Any` matches nothing and `All` matches
/// everything (vacuous subset); spawned searches never reach this case
/// because an empty target short-circuits before the index is consulted.
#[must_use]
pub fn mode_matches(candidate: &BTreeSet<String>, target: &BTreeSet<String>, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Any => target.iter().any(|label| candidate.contains(label)),
        MatchMode::All => target.is_subset(candidate),
        MatchMode::Exact => candidate == target,
    }
}

/// Read access to the searchable universe of (path, label set) entries
///
/// Implemented for every [`LabelStore`], so the embedded database and test
/// stores are searchable as-is.
pub trait SearchIndex {
    /// Every entry the search will consider
    ///
    /// # Errors
    /// Returns `StoreError` if enumeration fails.
    fn entries(&self) -> Result<Vec<(PathBuf, BTreeSet<String>)>, StoreError>;
}

impl<T: LabelStore> SearchIndex for T {
    fn entries(&self) -> Result<Vec<(PathBuf, BTreeSet<String>)>, StoreError> {
        LabelStore::entries(self)
    }
}

/// Terminal outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search ran to completion; the set may be empty
    Matches(BTreeSet<PathBuf>),
    /// The search was cancelled before completing
    Cancelled,
}

/// A search about to be spawned: the target labels and the match mode
#[derive(Debug, Clone)]
pub struct Search {
    target: BTreeSet<String>,
    mode: MatchMode,
}

impl Search {
    /// Build a search for an explicit target label set
    #[must_use]
    pub fn new(target: BTreeSet<String>, mode: MatchMode) -> Self {
        Self { target, mode }
    }

    /// Build a search targeting a label model's flattened label set
    #[must_use]
    pub fn for_labels(labels: &LabelSet, mode: MatchMode) -> Self {
        Self::new(labels.all_labels(), mode)
    }

    /// The target label set
    #[must_use]
    pub fn target(&self) -> &BTreeSet<String> {
        &self.target
    }

    /// The match mode
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Start the search on a background thread
    ///
    /// An empty target resolves immediately with empty matches and never
    /// touches the index.
    #[must_use]
    pub fn spawn(self, index: Arc<dyn SearchIndex + Send + Sync>) -> SearchHandle {
        let cancelled = Arc::new(AtomicBool::new(false));

        if self.target.is_empty() {
            return SearchHandle {
                state: HandleState::Immediate(SearchOutcome::Matches(BTreeSet::new())),
                cancelled,
            };
        }

        let (tx, rx) = mpsc::channel();
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            let result = run_search(&*index, &self.target, self.mode, &flag);
            // Receiver may already be gone; nothing to do then
            let _ = tx.send(result);
        });

        SearchHandle {
            state: HandleState::Pending(rx),
            cancelled,
        }
    }
}

fn run_search(
    index: &(dyn SearchIndex + Send + Sync),
    target: &BTreeSet<String>,
    mode: MatchMode,
    cancelled: &AtomicBool,
) -> Result<SearchOutcome, SearchError> {
    if cancelled.load(Ordering::SeqCst) {
        return Ok(SearchOutcome::Cancelled);
    }

    let entries = index.entries()?;

    let mut matches = BTreeSet::new();
    for (path, labels) in entries {
        if cancelled.load(Ordering::SeqCst) {
            return Ok(SearchOutcome::Cancelled);
        }
        if mode_matches(&labels, target, mode) {
            matches.insert(path);
        }
    }

    if cancelled.load(Ordering::SeqCst) {
        return Ok(SearchOutcome::Cancelled);
    }
    Ok(SearchOutcome::Matches(matches))
}

enum HandleState {
    /// Resolved at spawn time (empty target)
    Immediate(SearchOutcome),
    /// Worker will deliver the outcome
    Pending(mpsc::Receiver<Result<SearchOutcome, SearchError>>),
}

/// Handle to one running search
///
/// Resolves exactly once: [`SearchHandle::wait`] consumes the handle. A
/// handle cancelled before `wait` always resolves [`SearchOutcome::Cancelled`],
/// even if the worker had already finished gathering results.
pub struct SearchHandle {
    state: HandleState,
    cancelled: Arc<AtomicBool>,
}

impl SearchHandle {
    /// Request cancellation
    ///
    /// Cooperative: the worker observes the flag between entries and stops
    /// early. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Has cancellation been requested?
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Block until the search resolves and return its single outcome
    ///
    /// # Errors
    /// Returns `SearchError` if the index read failed or the worker died
    /// without reporting.
    pub fn wait(self) -> Result<SearchOutcome, SearchError> {
        // A cancel issued before wait wins over a completed result
        if self.cancelled.load(Ordering::SeqCst) {
            return Ok(SearchOutcome::Cancelled);
        }

        match self.state {
            HandleState::Immediate(outcome) => Ok(outcome),
            HandleState::Pending(rx) => rx.recv().map_err(|_| SearchError::WorkerGone)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use std::path::Path;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_mode_predicate_table() {
        let target = set(&["Red", "Work"]);

        // Superset of the target
        let a = set(&["Red", "Work", "Urgent"]);
        assert!(mode_matches(&a, &target, MatchMode::Any));
        assert!(mode_matches(&a, &target, MatchMode::All));
        assert!(!mode_matches(&a, &target, MatchMode::Exact));

        // Partial overlap
        let b = set(&["Red"]);
        assert!(mode_matches(&b, &target, MatchMode::Any));
        assert!(!mode_matches(&b, &target, MatchMode::All));
        assert!(!mode_matches(&b, &target, MatchMode::Exact));

        // Equal
        let c = set(&["Red", "Work"]);
        assert!(mode_matches(&c, &target, MatchMode::Any));
        assert!(mode_matches(&c, &target, MatchMode::All));
        assert!(mode_matches(&c, &target, MatchMode::Exact));

        // Disjoint
        let d = set(&["Blue"]);
        assert!(!mode_matches(&d, &target, MatchMode::Any));
        assert!(!mode_matches(&d, &target, MatchMode::All));
        assert!(!mode_matches(&d, &target, MatchMode::Exact));
    }

    #[test]
    fn test_search_finds_matches() {
        let store = MemoryStore::new();
        store.set(Path::new("a.txt"), &set(&["Red", "Work", "Urgent"])).unwrap();
        store.set(Path::new("b.txt"), &set(&["Red"])).unwrap();
        store.set(Path::new("c.txt"), &set(&["Blue"])).unwrap();

        let handle = Search::new(set(&["Red", "Work"]), MatchMode::Any).spawn(Arc::new(store));
        let outcome = handle.wait().unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Matches(
                [PathBuf::from("a.txt"), PathBuf::from("b.txt")]
                    .into_iter()
                    .collect()
            )
        );
    }

    #[test]
    fn test_search_all_and_exact_modes() {
        let store = Arc::new(MemoryStore::new());
        store.set(Path::new("a.txt"), &set(&["Red", "Work", "Urgent"])).unwrap();
        store.set(Path::new("c.txt"), &set(&["Red", "Work"])).unwrap();

        let all = Search::new(set(&["Red", "Work"]), MatchMode::All)
            .spawn(store.clone())
            .wait()
            .unwrap();
        assert_eq!(
            all,
            SearchOutcome::Matches(
                [PathBuf::from("a.txt"), PathBuf::from("c.txt")]
                    .into_iter()
                    .collect()
            )
        );

        let exact = Search::new(set(&["Red", "Work"]), MatchMode::Exact)
            .spawn(store)
            .wait()
            .unwrap();
        assert_eq!(
            exact,
            SearchOutcome::Matches([PathBuf::from("c.txt")].into_iter().collect())
        );
    }

    #[test]
    fn test_zero_matches_is_not_cancellation() {
        let store = MemoryStore::new();
        store.set(Path::new("a.txt"), &set(&["Blue"])).unwrap();

        let outcome = Search::new(set(&["Red"]), MatchMode::Any)
            .spawn(Arc::new(store))
            .wait()
            .unwrap();
        assert_eq!(outcome, SearchOutcome::Matches(BTreeSet::new()));
    }

    #[test]
    fn test_empty_target_short_circuits_without_index() {
        struct UntouchableIndex;

        impl SearchIndex for UntouchableIndex {
            fn entries(&self) -> Result<Vec<(PathBuf, BTreeSet<String>)>, StoreError> {
                panic!("empty-target search must not consult the index");
            }
        }

        let outcome = Search::new(BTreeSet::new(), MatchMode::Any)
            .spawn(Arc::new(UntouchableIndex))
            .wait()
            .unwrap();
        assert_eq!(outcome, SearchOutcome::Matches(BTreeSet::new()));
    }

    #[test]
    fn test_cancel_before_wait_resolves_cancelled() {
        let store = MemoryStore::new();
        store.set(Path::new("a.txt"), &set(&["Red"])).unwrap();

        let handle = Search::new(set(&["Red"]), MatchMode::Any).spawn(Arc::new(store));
        handle.cancel();
        assert!(handle.is_cancelled());

        // Never the success signal, even if the worker already finished
        assert_eq!(handle.wait().unwrap(), SearchOutcome::Cancelled);
    }

    #[test]
    fn test_cancel_is_repeatable() {
        let handle = Search::new(set(&["Red"]), MatchMode::Any).spawn(Arc::new(MemoryStore::new()));
        handle.cancel();
        handle.cancel();
        assert_eq!(handle.wait().unwrap(), SearchOutcome::Cancelled);
    }

    #[test]
    fn test_search_for_label_model() {
        use crate::colors::{ColorIndex, ColorTable};
        use crate::labels::LabelSet;

        let table = Arc::new(ColorTable::finder_default());
        let mut labels = LabelSet::new(table);
        labels.insert_color(ColorIndex::Red).insert_tag("Work");

        let search = Search::for_labels(&labels, MatchMode::All);
        assert_eq!(search.target(), &set(&["Red", "Work"]));
        assert_eq!(search.mode(), MatchMode::All);
    }
}
