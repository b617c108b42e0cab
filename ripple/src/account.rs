//! Ripple accounts.
//!
//! The sequence and the block height at creation are not derivable from the
//! key; the wallet ledger replays transfers and writes them back here.

use tracing::debug;
use wk_crypto::{derive_secp256k1, secp256k1_public_from_private, sign_secp256k1_der, Seed};
use wk_types::{Secp256k1PublicKey, SignatureError};

use crate::address::Address;
use crate::error::RippleError;

/// BIP-44 path for the first XRP account.
pub const DERIVATION_PATH: &str = "m/44'/144'/0'/0/0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    public_key: Secp256k1PublicKey,
    address: Address,
    sequence: u32,
    block_number_at_creation: Option<u64>,
}

impl Account {
    pub fn from_seed(seed: &Seed) -> Result<Self, RippleError> {
        let private_key = derive_secp256k1(seed, DERIVATION_PATH)?;
        let public_key = secp256k1_public_from_private(&private_key)?;
        Ok(Self::from_public_key(public_key))
    }

    pub fn from_public_key(public_key: Secp256k1PublicKey) -> Self {
        Self {
            address: Address::from_public_key(&public_key),
            public_key,
            sequence: 0,
            block_number_at_creation: None,
        }
    }

    pub fn public_key(&self) -> &Secp256k1PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn has_address(&self, address: &Address) -> bool {
        self.address == *address
    }

    /// Number of transactions this account has issued. Sequences start at 1,
    /// so the next payment uses this plus one.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn set_sequence(&mut self, sequence: u32) {
        self.sequence = sequence;
    }

    pub fn block_number_at_creation(&self) -> Option<u64> {
        self.block_number_at_creation
    }

    pub fn set_block_number_at_creation(&mut self, block: Option<u64>) {
        self.block_number_at_creation = block;
    }

    /// DER signature over a 32-byte signing hash, with the key `seed` derives.
    pub fn sign(&self, seed: &Seed, digest: &[u8; 32]) -> Result<Vec<u8>, SignatureError> {
        let private_key = derive_secp256k1(seed, DERIVATION_PATH)
            .map_err(|e| SignatureError::KeyDerivation(e.to_string()))?;
        if secp256k1_public_from_private(&private_key)? != self.public_key {
            return Err(SignatureError::KeyMismatch);
        }
        debug!(address = %self.address, "signing ripple transaction");
        sign_secp256k1_der(digest, &private_key)
    }
}
