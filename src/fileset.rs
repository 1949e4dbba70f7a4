//! An AND-combined, stack-like collection of filters.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::filter::Filter;

/// Ordered, mutable stack of [`Filter`] predicates.
///
/// Combination is logical AND regardless of order; order only matters for
/// the interactive session's undo, where `pop` removes the most recently
/// appended predicate. An empty set matches everything.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    filters: Vec<Filter>,
}

impl FileSet {
    /// An empty set, matching every path.
    pub fn new() -> FileSet {
        FileSet::default()
    }

    /// Append a predicate.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Remove and return the most recently appended predicate.
    pub fn pop(&mut self) -> Option<Filter> {
        self.filters.pop()
    }

    /// Remove all predicates.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Number of predicates in the set.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the set has no predicates.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether every predicate accepts `path`, evaluated relative to
    /// `root`.
    pub fn matches(&self, path: &Path, root: &Path) -> bool {
        self.filters.iter().all(|filter| filter.test(path, root))
    }

    /// Lazily enumerate every path under `root` (at any depth, root
    /// itself excluded) accepted by every predicate.
    ///
    /// The traversal is fresh and uncached on every call, and the yield
    /// order is whatever the filesystem enumerates, so callers must treat
    /// the result as a set. Unreadable entries are skipped with a warning
    /// on stderr.
    pub fn resolve<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        let root = root.to_path_buf();
        WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(err) => {
                    eprintln!("Warning: skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(move |path| self.matches(path, &root))
    }
}

impl From<Vec<Filter>> for FileSet {
    fn from(filters: Vec<Filter>) -> FileSet {
        FileSet { filters }
    }
}
