//! Recursive directory walk backed by [`walkdir`].
//!
//! # Overview
//!
//! [`scan`] enumerates one comparison root depth-first and collects the
//! canonical absolute path of every regular file it finds. Directories are
//! recursed into; symlinks, devices, sockets and other non-regular entries
//! are skipped without being followed.
//!
//! Entry order within each directory is whatever the OS reports. No sorting
//! is imposed: the pairwise matcher is order-insensitive for correctness,
//! and the raw order keeps the walk cheap and the log order faithful to the
//! filesystem.
//!
//! # Example
//!
//! ```no_run
//! use crossdupe::scanner::scan;
//! use std::path::Path;
//!
//! let files = scan(Path::new("/srv/backup")).expect("scan failed");
//! println!("Found {} files", files.len());
//! ```

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::ScanError;
use crate::collection::FileCollection;

/// Recursively scan `root`, collecting every regular file beneath it.
///
/// Returns a [`FileCollection`] of canonical absolute paths in discovery
/// order. The root itself is never collected, only its contents.
///
/// # Errors
///
/// * [`ScanError::Access`] if `root` cannot be accessed at all.
/// * [`ScanError::NotADirectory`] if `root` does not name a directory.
/// * [`ScanError::Walk`] if any directory in the subtree cannot be opened
///   or enumerated. The scan aborts rather than returning a partial
///   collection.
/// * [`ScanError::Canonicalize`] if a listed file vanishes or cannot be
///   resolved before it is recorded.
pub fn scan(root: &Path) -> Result<FileCollection, ScanError> {
    let root_meta = fs::symlink_metadata(root).map_err(|source| ScanError::Access {
        path: root.to_path_buf(),
        source,
    })?;
    if !root_meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut collection = FileCollection::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: root.to_path_buf(),
            source,
        })?;

        // Directories are recursed into by walkdir itself; symlinks and
        // other non-regular entries are skipped entirely.
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-regular entry: {}", entry.path().display());
            continue;
        }

        let canonical =
            fs::canonicalize(entry.path()).map_err(|source| ScanError::Canonicalize {
                path: entry.path().to_path_buf(),
                source,
            })?;

        log::trace!("Collected file: {}", canonical.display());
        collection.push(canonical);
    }

    log::debug!(
        "Scanned {}: {} regular files",
        root.display(),
        collection.len()
    );

    Ok(collection)
}
