//! Address derivation from candidate word orderings.
//!
//! The search engine never inspects how an address is produced; it only
//! needs a pure, deterministic function from an ordered word list to a
//! comparable address string. [`Deriver`] is that seam. A failed
//! derivation (bad checksum, unknown word) marks the candidate as a
//! non-match; it is never a fatal condition for the search.

pub mod tron;

pub use tron::TronDeriver;

use thiserror::Error;

/// Why a candidate ordering could not be derived into an address.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// The candidate phrase is not a well-formed mnemonic.
    #[error("invalid mnemonic phrase: {0}")]
    InvalidPhrase(#[from] bip39::Error),
    /// Hierarchical key derivation failed for the configured path.
    #[error("key derivation failed: {0}")]
    KeyDerivation(#[from] bip32::Error),
}

/// Maps one ordered word list to one address.
///
/// Implementations must be pure functions of their input, deterministic,
/// and callable concurrently from multiple worker threads without
/// external synchronization.
pub trait Deriver: Sync {
    fn derive(&self, words: &[String]) -> Result<String, DeriveError>;
}
