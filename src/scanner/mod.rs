//! Scanner module for recursive file discovery.
//!
//! The scanner walks one comparison root and produces a
//! [`FileCollection`](crate::collection::FileCollection) of every regular
//! file under it. Traversal is single-threaded and depth-first via
//! [`walkdir`], with per-directory entry order left exactly as the OS
//! reports it.
//!
//! A failure to enumerate any directory in the subtree aborts the whole
//! scan. Partial collections are never returned: a silently incomplete
//! collection would make the later pairwise comparison incomplete without
//! any visible signal.

pub mod walker;

use std::path::PathBuf;

pub use walker::scan;

/// Errors that can occur while scanning a comparison root.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The root path does not name a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The root path could not be accessed at all.
    #[error("Cannot access {path}: {source}")]
    Access {
        /// The root path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be opened or enumerated mid-walk.
    #[error("Failed to read directory entry under {path}: {source}")]
    Walk {
        /// Root whose subtree was being walked
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// A listed file could not be resolved to a canonical path.
    #[error("Failed to canonicalize {path}: {source}")]
    Canonicalize {
        /// Path that failed to resolve
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /file.txt");

        let err = ScanError::Canonicalize {
            path: PathBuf::from("/gone"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("Failed to canonicalize /gone"));
    }
}
