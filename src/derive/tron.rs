//! BIP-44 address derivation for TRON-style base58check addresses.

use bip32::secp256k1::elliptic_curve::sec1::ToEncodedPoint;
use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic};
use sha2::Sha256;
use sha3::{Digest, Keccak256};

use super::{DeriveError, Deriver};

/// Version byte prefixing the 20-byte account id in a TRON address.
const ADDRESS_PREFIX: u8 = 0x41;

/// Derives base58check addresses from candidate phrases along a fixed
/// BIP-44 path.
///
/// Candidate orderings whose BIP-39 checksum does not validate fail
/// with [`DeriveError::InvalidPhrase`]; the search counts them as
/// checked non-matches.
#[derive(Debug, Clone)]
pub struct TronDeriver {
    path: DerivationPath,
}

impl TronDeriver {
    /// First external address of the first TRON account (coin type 195).
    pub const DEFAULT_PATH: &'static str = "m/44'/195'/0'/0/0";

    pub fn new(path: DerivationPath) -> Self {
        Self { path }
    }
}

impl Default for TronDeriver {
    fn default() -> Self {
        let path = Self::DEFAULT_PATH
            .parse()
            .expect("default derivation path is well-formed");
        Self { path }
    }
}

impl Deriver for TronDeriver {
    fn derive(&self, words: &[String]) -> Result<String, DeriveError> {
        let phrase = words.join(" ");
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &phrase)?;
        let seed = mnemonic.to_seed_normalized("");
        let key = XPrv::derive_from_path(seed, &self.path)?;

        // Keccak-256 over the uncompressed public key without its 0x04
        // SEC1 tag; the low 20 bytes become the account id.
        let point = key.public_key().public_key().to_encoded_point(false);
        let digest = Keccak256::digest(&point.as_bytes()[1..]);

        let mut payload = [0u8; 25];
        payload[0] = ADDRESS_PREFIX;
        payload[1..21].copy_from_slice(&digest[12..]);
        let checksum = Sha256::digest(Sha256::digest(&payload[..21]));
        payload[21..].copy_from_slice(&checksum[..4]);

        Ok(bs58::encode(payload).into_string())
    }
}
