//! Parallel search over the distinct orderings of a phrase.
//!
//! # Architecture
//!
//! The search system consists of:
//! - A **producer** that enumerates distinct permutations lazily and
//!   groups them into fixed-size batches on a bounded work queue
//! - Multiple **workers** that pull batches, derive an address per
//!   candidate, and compare it against the target
//! - **Shared state** holding the progress counter and the
//!   level-triggered found flag that cancels everything else
//! - A **reporter** that periodically prints progress and rate
//! - A **coordinator** that owns the lifecycle of all of the above and
//!   returns the first match (or exhaustion) to its caller

pub mod batch;
pub mod config;
pub mod coordinator;
pub mod progress;
pub mod result;
pub mod shared;

pub use config::SearchConfig;
pub use coordinator::run_search;
pub use result::{SearchError, SearchOutcome, SearchReport, SearchStatistics};
