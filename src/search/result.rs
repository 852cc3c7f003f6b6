//! Search outcome types and statistics.

use std::time::Duration;
use thiserror::Error;

/// Terminal outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The input order already derives the target; no workers ran.
    AlreadyCorrect(Vec<String>),
    /// A reordering of the words that derives the target.
    Found(Vec<String>),
    /// Every distinct ordering was checked without a match.
    Exhausted,
}

/// Counters captured when a search ends.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Number of distinct orderings in the search space.
    pub total: u64,
    /// Candidates evaluated before the search ended.
    pub evaluated: u64,
    /// Wall-clock time the search ran for.
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// Candidates evaluated per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.evaluated as f64 / secs
        }
    }
}

/// Outcome plus the statistics describing how it was reached.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub statistics: SearchStatistics,
}

/// Failures that abort a search as a whole.
///
/// Per-candidate derivation failures are *not* here; those are
/// non-matches handled inside the workers.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The phrase contains no words.
    #[error("the phrase contains no words")]
    EmptyPhrase,
    /// The distinct-ordering count does not fit the progress counter.
    #[error("the search space for {words} words exceeds the supported size")]
    SpaceTooLarge { words: usize },
    /// A worker stopped without reporting completion. The space may not
    /// have been fully covered, so no exhausted verdict is possible.
    #[error("a search worker terminated abnormally")]
    WorkerFailure,
}
