//! Periodic progress reporting for a running search.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::shared::SharedState;

/// Sample the shared counters every `interval` and overwrite one status
/// line on stderr until a match is found or the space is covered.
///
/// Read-only on the shared state; workers are never blocked or delayed
/// by reporting.
pub fn run_reporter(state: &SharedState, total: u64, interval: Duration, start: Instant) {
    let mut wrote = false;
    loop {
        if state.is_found() {
            break;
        }
        let checked = state.progress();
        if checked >= total {
            break;
        }
        let elapsed = start.elapsed().as_secs_f64();
        let rate = checked as f64 / (elapsed + 1e-9);
        let percent = checked as f64 / total as f64 * 100.0;
        eprint!(
            "\rchecked {}/{} ({:.4}%) | {:.1} candidates/sec",
            checked, total, percent, rate
        );
        let _ = io::stderr().flush();
        wrote = true;
        std::thread::sleep(interval);
    }
    if wrote {
        eprintln!();
    }
}
