//! crossdupe - Cross-Tree Duplicate Auditor
//!
//! A batch CLI tool that finds files byte-for-byte identical between two
//! directory trees and appends a metadata record for each matching pair to
//! a log file. Useful for verifying a backup against its source or finding
//! duplicated content across two archives.
//!
//! The run is single-threaded and single-shot: scan both roots, compare
//! every file on one side against every file on the other, log both paths
//! of each matching pair.

pub mod cli;
pub mod collection;
pub mod compare;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod matchlog;
pub mod scanner;

use anyhow::{bail, Context, Result};

use cli::Cli;
use error::ExitCode;
use matchlog::MatchLogger;

/// Run the full scan-compare-log pipeline for a parsed CLI invocation.
///
/// Validates both roots, scans each into a collection, then drives the
/// exhaustive pairwise comparison. Returns the exit code on success;
/// fatal errors (unusable root, unwritable log destination) are returned
/// for the binary entry point to report.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    for root in [&cli.first_dir, &cli.second_dir] {
        let metadata = std::fs::symlink_metadata(root)
            .with_context(|| format!("{}: cannot access path", root.display()))?;
        if !metadata.is_dir() {
            bail!("{}: not a directory", root.display());
        }
    }

    log::info!(
        "Comparing {} against {}",
        cli.first_dir.display(),
        cli.second_dir.display()
    );

    let first = scanner::scan(&cli.first_dir)
        .with_context(|| format!("Failed to scan {}", cli.first_dir.display()))?;
    let second = scanner::scan(&cli.second_dir)
        .with_context(|| format!("Failed to scan {}", cli.second_dir.display()))?;

    let logger = MatchLogger::new(cli.log_file);
    let stats = matcher::compare_and_log(&first, &second, &logger)?;

    log::info!(
        "Compared {} x {} files: {} matching pairs, {} records written to {}",
        stats.first_files,
        stats.second_files,
        stats.matching_pairs,
        stats.records_written,
        logger.destination().display()
    );
    if stats.pairs_skipped > 0 || stats.records_skipped > 0 {
        log::warn!(
            "Skipped {} pairs and {} records due to errors",
            stats.pairs_skipped,
            stats.records_skipped
        );
    }

    Ok(ExitCode::Success)
}
