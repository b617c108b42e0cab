//! Tezos accounts: an ed25519 public key and its `tz1` address.

use tracing::debug;
use wk_crypto::{derive_ed25519, sign_ed25519, Seed};
use wk_types::{PublicKey, Signature, SignatureError};

use crate::address::Address;
use crate::error::TezosError;

/// SLIP-10 path `m/44'/1729'/0'/0'`.
pub const DERIVATION_PATH: [u32; 4] = [44, 1729, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    public_key: PublicKey,
    address: Address,
}

impl Account {
    pub fn from_seed(seed: &Seed) -> Result<Self, TezosError> {
        let keypair = derive_ed25519(seed, &DERIVATION_PATH)?;
        Ok(Self::from_public_key(keypair.public))
    }

    pub fn from_public_key(public_key: PublicKey) -> Self {
        Self {
            address: Address::from_public_key(&public_key),
            public_key,
        }
    }

    /// Restore from [`Account::serialize`] output: the raw 32-byte public key.
    pub fn from_serialization(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; 32] = bytes.try_into().ok()?;
        Some(Self::from_public_key(PublicKey(raw)))
    }

    pub fn serialize(&self) -> [u8; 32] {
        self.public_key.0
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn has_address(&self, address: &Address) -> bool {
        self.address == *address
    }

    /// Sign `message` with the key derived from `seed`.
    ///
    /// The seed must derive this account's public key; the private key is
    /// dropped (and zeroized) before returning.
    pub fn sign(&self, seed: &Seed, message: &[u8]) -> Result<Signature, SignatureError> {
        let keypair = derive_ed25519(seed, &DERIVATION_PATH)
            .map_err(|e| SignatureError::KeyDerivation(e.to_string()))?;
        if keypair.public != self.public_key {
            return Err(SignatureError::KeyMismatch);
        }
        debug!(address = %self.address, len = message.len(), "signing tezos operation");
        Ok(sign_ed25519(message, &keypair.private))
    }
}
