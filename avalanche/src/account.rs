//! Avalanche accounts: a compressed secp256k1 key and its X-chain short id.

use tracing::debug;
use wk_crypto::{
    derive_secp256k1, secp256k1_public_from_private, sign_secp256k1_recoverable, Seed,
};
use wk_types::{RecoverableSignature, Secp256k1PublicKey, SignatureError};

use crate::address::Address;
use crate::error::AvalancheError;

/// BIP-44 path for the first X-chain account.
pub const DERIVATION_PATH: &str = "m/44'/9000'/0'/0/0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    public_key: Secp256k1PublicKey,
    address: Address,
}

impl Account {
    pub fn from_seed(seed: &Seed) -> Result<Self, AvalancheError> {
        let private_key = derive_secp256k1(seed, DERIVATION_PATH)?;
        Ok(Self::from_public_key(secp256k1_public_from_private(&private_key)?))
    }

    pub fn from_public_key(public_key: Secp256k1PublicKey) -> Self {
        Self {
            address: Address::from_public_key(&public_key),
            public_key,
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

    pub fn sign(
        &self,
        seed: &Seed,
        digest: &[u8; 32],
    ) -> Result<RecoverableSignature, SignatureError> {
        let private_key = derive_secp256k1(seed, DERIVATION_PATH)
            .map_err(|e| SignatureError::KeyDerivation(e.to_string()))?;
        if secp256k1_public_from_private(&private_key)? != self.public_key {
            return Err(SignatureError::KeyMismatch);
        }
        debug!(address = ?self.address, "signing avalanche transaction");
        sign_secp256k1_recoverable(digest, &private_key)
    }
}
