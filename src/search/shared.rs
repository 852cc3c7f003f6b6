//! State shared between workers, the producer and the reporter.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Progress counter and cancellation flag for one search.
///
/// Created fresh per search and handed to every thread by reference;
/// nothing here is ambient or global. `progress` only grows and never
/// exceeds the total permutation count; `found` transitions false→true
/// at most once logically (later sets are idempotent no-ops) and is the
/// sole cancellation signal.
#[derive(Debug, Default)]
pub struct SharedState {
    progress: AtomicU64,
    found: AtomicBool,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluated candidate. Safe under any number of
    /// concurrent writers; increments are never lost.
    pub fn record_candidate(&self) {
        self.progress.fetch_add(1, Ordering::SeqCst);
    }

    pub fn progress(&self) -> u64 {
        self.progress.load(Ordering::SeqCst)
    }

    /// Raise the level-triggered found flag. Once set it stays set.
    pub fn mark_found(&self) {
        self.found.store(true, Ordering::SeqCst);
    }

    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_found_flag_is_level_triggered() {
        let state = SharedState::new();
        assert!(!state.is_found());
        state.mark_found();
        assert!(state.is_found());
        // Idempotent.
        state.mark_found();
        assert!(state.is_found());
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        const WORKERS: usize = 8;
        const INCREMENTS: u64 = 10_000;

        let state = SharedState::new();
        thread::scope(|scope| {
            for _ in 0..WORKERS {
                scope.spawn(|| {
                    for _ in 0..INCREMENTS {
                        state.record_candidate();
                    }
                });
            }
        });
        assert_eq!(state.progress(), WORKERS as u64 * INCREMENTS);
    }
}
