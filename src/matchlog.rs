//! Append-only metadata log for matched files.
//!
//! Every file that participates in a match gets one record appended to the
//! log destination:
//!
//! ```text
//! <absolute_path> <size_in_bytes> <ctime_style_timestamp> <rwxrwxrwx> <inode>
//! ```
//!
//! One record per line, fields space-separated. Paths containing the field
//! separator are a known format limitation and are written as-is. The
//! destination is opened in append mode for every record and created with
//! mode 0o664 if absent; existing content is never truncated.

use std::fs::{Metadata, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Permission mode used when the log destination is first created.
#[cfg(unix)]
const LOG_CREATE_MODE: u32 = 0o664;

/// Errors that can occur while logging a match record.
#[derive(thiserror::Error, Debug)]
pub enum LogError {
    /// The log destination could not be opened or written.
    ///
    /// Fatal to the run: every subsequent record would fail the same way.
    #[error("Failed to write log {path}: {source}")]
    Destination {
        /// The log destination path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Metadata for the matched file could not be read.
    ///
    /// Local to this record: the file may have been removed between being
    /// listed and being logged. The run continues.
    #[error("Failed to read metadata for {path}: {source}")]
    Metadata {
        /// The matched file whose metadata was unreadable
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Writer of match records to one append-only log destination.
#[derive(Debug)]
pub struct MatchLogger {
    destination: PathBuf,
}

impl MatchLogger {
    /// Create a logger for the given destination path.
    ///
    /// The destination is not touched until the first record is written.
    #[must_use]
    pub fn new(destination: PathBuf) -> Self {
        Self { destination }
    }

    /// The destination this logger appends to.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Append one metadata record for `file` to the log destination.
    ///
    /// # Errors
    ///
    /// * [`LogError::Metadata`] if `file`'s metadata cannot be read; the
    ///   caller skips this record and continues.
    /// * [`LogError::Destination`] if the log cannot be opened or written;
    ///   the caller treats this as fatal.
    pub fn log_match(&self, file: &Path) -> Result<(), LogError> {
        let metadata = file.metadata().map_err(|source| LogError::Metadata {
            path: file.to_path_buf(),
            source,
        })?;

        let record = format_record(file, &metadata);

        let mut log_file = open_for_append(&self.destination).map_err(|source| {
            LogError::Destination {
                path: self.destination.clone(),
                source,
            }
        })?;

        log_file
            .write_all(record.as_bytes())
            .map_err(|source| LogError::Destination {
                path: self.destination.clone(),
                source,
            })
    }
}

#[cfg(unix)]
fn open_for_append(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .append(true)
        .create(true)
        .mode(LOG_CREATE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_append(path: &Path) -> std::io::Result<std::fs::File> {
    OpenOptions::new().append(true).create(true).open(path)
}

/// Render one newline-terminated record in the fixed field order.
fn format_record(file: &Path, metadata: &Metadata) -> String {
    let mtime = metadata
        .modified()
        .map(format_timestamp)
        .unwrap_or_else(|_| "?".to_string());

    format!(
        "{} {} {} {} {}\n",
        file.display(),
        metadata.len(),
        mtime,
        permission_string(metadata),
        inode_number(metadata),
    )
}

/// Render a modification time in ctime style, e.g. `Sun Aug 30 14:03:12 2026`.
fn format_timestamp(mtime: std::time::SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Build the 9-character `rwxrwxrwx`-with-dashes permission string.
#[cfg(unix)]
fn permission_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let mut perms = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        perms.push(if mode >> shift & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if mode >> shift & 0o2 != 0 { 'w' } else { '-' });
        perms.push(if mode >> shift & 0o1 != 0 { 'x' } else { '-' });
    }
    perms
}

#[cfg(not(unix))]
fn permission_string(metadata: &Metadata) -> String {
    // No per-role bits available; report the readonly flag uniformly.
    if metadata.permissions().readonly() {
        "r--r--r--".to_string()
    } else {
        "rw-rw-rw-".to_string()
    }
}

#[cfg(unix)]
fn inode_number(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ino()
}

#[cfg(not(unix))]
fn inode_number(_metadata: &Metadata) -> u64 {
    0
}
