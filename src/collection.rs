//! Ordered collection of discovered file paths.
//!
//! A [`FileCollection`] holds the canonical absolute paths of every regular
//! file found under one comparison root, in discovery order. The scanner
//! appends to it during traversal and the matcher iterates it read-only;
//! nothing else mutates it.
//!
//! Insertion order does not affect which pairs match, but it determines the
//! order of comparisons and therefore the order of log records, so keeping
//! it stable makes runs reproducible on the same filesystem state.

use std::path::{Path, PathBuf};

/// Ordered set of file paths discovered under one directory root.
///
/// Paths are stored exactly as the scanner resolved them: absolute and
/// canonical, with symlinks and relative segments removed.
#[derive(Debug, Clone, Default)]
pub struct FileCollection {
    paths: Vec<PathBuf>,
}

impl FileCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path at the tail, preserving discovery order.
    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Remove and return the most recently appended path.
    ///
    /// Returns `None` on an empty collection. Not used by the matching
    /// workflow itself; exposed for callers that trim a collection after
    /// scanning.
    pub fn pop(&mut self) -> Option<PathBuf> {
        self.paths.pop()
    }

    /// Number of paths currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True iff the collection holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in insertion order.
    ///
    /// The iterator is restartable (call `iter` again) and does not mutate
    /// the collection.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
