//! Exhaustive pairwise comparison of two file collections.
//!
//! Every file of the first collection is compared against every file of the
//! second, in iteration order, with no short-circuiting: a file that
//! matches several files on the other side produces one match event per
//! match. This is a deliberate O(n·m) audit pass, not an equivalence-class
//! computation, so the same file can appear in the log many times.
//!
//! Per-pair failures (a file vanished, became unreadable) skip that pair
//! and keep the loop going. Only a log-destination failure aborts the run,
//! since every later record would hit the same error.

use crate::collection::FileCollection;
use crate::compare::files_equal;
use crate::matchlog::{LogError, MatchLogger};

/// Counters describing one completed matcher run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Files in the first collection
    pub first_files: usize,
    /// Files in the second collection
    pub second_files: usize,
    /// Pairs for which the comparator ran to completion
    pub pairs_compared: usize,
    /// Pairs found byte-identical
    pub matching_pairs: usize,
    /// Records appended to the log
    pub records_written: usize,
    /// Pairs skipped because a file could not be opened or read
    pub pairs_skipped: usize,
    /// Match records skipped because metadata was unreadable
    pub records_skipped: usize,
}

/// Compare every file of `first` against every file of `second`, logging
/// both sides of each matching pair.
///
/// On a match, the path from `first` is logged before the path from
/// `second` (two records per pair, in that order).
///
/// # Errors
///
/// Only [`LogError::Destination`] is returned: the log file being
/// unwritable makes every remaining record pointless. All other failures
/// are counted in the returned [`MatchStats`] and logged as warnings.
pub fn compare_and_log(
    first: &FileCollection,
    second: &FileCollection,
    logger: &MatchLogger,
) -> Result<MatchStats, LogError> {
    let mut stats = MatchStats {
        first_files: first.len(),
        second_files: second.len(),
        ..MatchStats::default()
    };

    for path_a in first.iter() {
        for path_b in second.iter() {
            let equal = match files_equal(path_a, path_b) {
                Ok(equal) => equal,
                Err(e) => {
                    log::warn!(
                        "Skipping pair ({}, {}): {}",
                        path_a.display(),
                        path_b.display(),
                        e
                    );
                    stats.pairs_skipped += 1;
                    continue;
                }
            };

            stats.pairs_compared += 1;
            if !equal {
                continue;
            }

            log::debug!("Match: {} == {}", path_a.display(), path_b.display());
            stats.matching_pairs += 1;

            for matched in [path_a, path_b] {
                match logger.log_match(matched) {
                    Ok(()) => stats.records_written += 1,
                    Err(e @ LogError::Metadata { .. }) => {
                        log::warn!("Skipping record: {}", e);
                        stats.records_skipped += 1;
                    }
                    Err(e @ LogError::Destination { .. }) => return Err(e),
                }
            }
        }
    }

    Ok(stats)
}
