//! Configuration for the permutation search.

use std::time::Duration;

/// Tuning knobs for one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Candidates per dispatched batch. Smaller batches react faster to
    /// a match found elsewhere; larger batches cost less coordination.
    pub batch_size: usize,
    /// Number of worker threads.
    pub num_workers: usize,
    /// Sampling period of the progress reporter.
    pub report_interval: Duration,
    /// Whether progress lines are printed while searching.
    pub progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            num_workers: num_cpus::get(),
            report_interval: Duration::from_millis(100),
            progress: true,
        }
    }
}

impl SearchConfig {
    /// Set the number of candidates per batch (minimum 1).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the number of worker threads (minimum 1).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the progress reporter's sampling period.
    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    /// Enable or disable progress output.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }
}
