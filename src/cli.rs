//! Command-line interface definitions for crossdupe.
//!
//! The CLI takes three positional arguments and a few global flags, using
//! the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Audit a backup against its source, appending matches to dupes.log
//! crossdupe /srv/source /srv/backup dupes.log
//!
//! # Verbose mode for debugging
//! crossdupe -v /srv/source /srv/backup dupes.log
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Cross-tree duplicate auditor.
///
/// Finds files that are byte-for-byte identical between two directory
/// trees and appends a metadata record for each matching pair to a log
/// file.
#[derive(Debug, Parser)]
#[command(name = "crossdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First directory tree to compare
    #[arg(value_name = "FIRST_DIR")]
    pub first_dir: PathBuf,

    /// Second directory tree to compare
    #[arg(value_name = "SECOND_DIR")]
    pub second_dir: PathBuf,

    /// Log file to append match records to (created if absent)
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}
