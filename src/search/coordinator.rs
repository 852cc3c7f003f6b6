//! Coordinator that drives the worker pool over the candidate stream.

use std::time::Instant;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::derive::Deriver;
use crate::permute::Multiset;

use super::batch::Batches;
use super::config::SearchConfig;
use super::progress::run_reporter;
use super::result::{SearchError, SearchOutcome, SearchReport, SearchStatistics};
use super::shared::SharedState;

/// One unit of dispatched work.
type CandidateBatch = Vec<Vec<String>>;

/// Message sent from a worker to the coordinator.
#[derive(Debug)]
enum WorkerMessage {
    /// The worker evaluated a candidate that derives the target.
    Found { permutation: Vec<String> },
    /// The worker ran out of work (or was cancelled) and is exiting.
    Finished { evaluated: u64 },
}

/// Batches materialized ahead of the workers. The bounded queue is the
/// backpressure that keeps enumeration lazy.
const QUEUE_DEPTH: usize = 4;

/// Search every distinct ordering of `words` for one whose derived
/// address equals `target`.
///
/// The input order is checked first; when it already matches, the
/// result is [`SearchOutcome::AlreadyCorrect`] and no threads are
/// spawned. Otherwise a producer thread feeds permutation batches to
/// `config.num_workers` workers until one reports a match or the space
/// is exhausted. Per-candidate derivation failures are counted as
/// checked non-matches; a worker dying is a [`SearchError::WorkerFailure`]
/// for the whole search, never a silent false exhaustion.
pub fn run_search<D: Deriver>(
    words: &[String],
    target: &str,
    deriver: &D,
    config: &SearchConfig,
) -> Result<SearchReport, SearchError> {
    if words.is_empty() {
        return Err(SearchError::EmptyPhrase);
    }

    let start = Instant::now();
    let multiset = Multiset::new(words);
    let total = multiset
        .distinct_permutation_count()
        .ok_or(SearchError::SpaceTooLarge { words: words.len() })?;

    // The order as given may already be the right one.
    if derives_target(deriver, words, target) {
        return Ok(SearchReport {
            outcome: SearchOutcome::AlreadyCorrect(words.to_vec()),
            statistics: SearchStatistics {
                total,
                evaluated: 0,
                elapsed: start.elapsed(),
            },
        });
    }

    let state = SharedState::new();
    let (batch_tx, batch_rx) = bounded::<CandidateBatch>(QUEUE_DEPTH);
    let (msg_tx, msg_rx) = unbounded::<WorkerMessage>();

    let num_workers = config.num_workers;
    let mut matched: Option<Vec<String>> = None;
    let mut evaluated = 0u64;
    let mut finished = 0usize;
    let mut worker_panicked = false;

    std::thread::scope(|scope| {
        // Producer: enumerate lazily and batch ahead of the workers.
        let producer_state = &state;
        let batch_size = config.batch_size;
        let permutations = multiset.permutations();
        scope.spawn(move || {
            for batch in Batches::new(permutations, batch_size) {
                if producer_state.is_found() {
                    break;
                }
                // Workers dropping their receivers also ends the feed.
                if batch_tx.send(batch).is_err() {
                    break;
                }
            }
        });

        // Workers share the queue receiver; each batch is popped by
        // exactly one of them.
        let mut handles = Vec::with_capacity(num_workers);
        for _ in 0..num_workers {
            let batches = batch_rx.clone();
            let messages = msg_tx.clone();
            let worker_state = &state;
            handles.push(scope.spawn(move || {
                run_worker(batches, messages, worker_state, deriver, target)
            }));
        }
        drop(batch_rx);
        drop(msg_tx);

        if config.progress {
            let reporter_state = &state;
            let interval = config.report_interval;
            scope.spawn(move || run_reporter(reporter_state, total, interval, start));
        }

        // Drain worker messages until every worker has reported in. The
        // first match wins; simultaneous later matches are ignored.
        while finished < num_workers {
            match msg_rx.recv() {
                Ok(WorkerMessage::Found { permutation }) => {
                    if matched.is_none() {
                        matched = Some(permutation);
                    }
                }
                Ok(WorkerMessage::Finished { evaluated: count }) => {
                    evaluated += count;
                    finished += 1;
                }
                // All senders gone with workers unaccounted for: at
                // least one died without finishing.
                Err(_) => break,
            }
        }

        // Exhaustion must stop the reporter just like a match does.
        state.mark_found();

        for handle in handles {
            if handle.join().is_err() {
                worker_panicked = true;
            }
        }
    });

    if worker_panicked || finished < num_workers {
        return Err(SearchError::WorkerFailure);
    }

    let statistics = SearchStatistics {
        total,
        evaluated,
        elapsed: start.elapsed(),
    };
    let outcome = match matched {
        Some(permutation) => SearchOutcome::Found(permutation),
        None => SearchOutcome::Exhausted,
    };
    Ok(SearchReport {
        outcome,
        statistics,
    })
}

/// Worker loop: pull batches, derive each candidate, report a match.
///
/// The found flag is checked between batches and again before every
/// candidate, so a match elsewhere wastes at most one in-flight
/// derivation here. Derivation failures count as progress and the loop
/// moves on; they never abort the worker.
fn run_worker<D: Deriver>(
    batches: Receiver<CandidateBatch>,
    messages: Sender<WorkerMessage>,
    state: &SharedState,
    deriver: &D,
    target: &str,
) {
    let mut evaluated = 0u64;
    'pull: while let Ok(batch) = batches.recv() {
        if state.is_found() {
            break;
        }
        for permutation in batch {
            if state.is_found() {
                break 'pull;
            }
            let derived = deriver.derive(&permutation);
            state.record_candidate();
            evaluated += 1;
            if let Ok(address) = derived {
                if address == target {
                    state.mark_found();
                    let _ = messages.send(WorkerMessage::Found { permutation });
                    break 'pull;
                }
            }
        }
    }
    let _ = messages.send(WorkerMessage::Finished { evaluated });
}

fn derives_target<D: Deriver>(deriver: &D, words: &[String], target: &str) -> bool {
    match deriver.derive(words) {
        Ok(address) => address == target,
        Err(_) => false,
    }
}
