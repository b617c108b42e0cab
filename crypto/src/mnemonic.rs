//! BIP39 seeds and hierarchical key derivation.
//!
//! A BIP39 phrase yields a 64-byte seed (PBKDF2-HMAC-SHA512, 2048 rounds,
//! salt `"mnemonic" + passphrase`). From that seed:
//!
//! - ed25519 keys (Tezos) use SLIP-10, which only defines hardened children.
//! - secp256k1 keys (Ripple, Avalanche) use BIP-32 via the `bip32` crate.
//!
//! Derived private keys are zeroized on drop; callers derive them per
//! signing operation and never store them.

use bip32::{DerivationPath, XPrv};
use bip39::Mnemonic;
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use thiserror::Error;
use wk_types::{KeyPair, PrivateKey, PublicKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha512 = Hmac<Sha512>;

/// Flag bit marking a hardened child index.
pub const HARDENED: u32 = 0x8000_0000;

const SLIP10_ED25519_KEY: &[u8] = b"ed25519 seed";

/// Errors arising from mnemonic and derivation operations.
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}

/// A 64-byte BIP39 seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    pub fn new(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Derive the BIP39 seed for `phrase` with an optional passphrase.
pub fn seed_from_mnemonic(phrase: &str, passphrase: &str) -> Result<Seed, MnemonicError> {
    let mnemonic = Mnemonic::parse_normalized(phrase)
        .map_err(|e| MnemonicError::InvalidMnemonic(e.to_string()))?;
    Ok(Seed(mnemonic.to_seed_normalized(passphrase)))
}

/// Validate that a phrase is a valid BIP39 mnemonic.
pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::parse_normalized(phrase).is_ok()
}

/// SLIP-10 ed25519 derivation along `path`.
///
/// Every index is treated as hardened (the hardened bit is forced on), so
/// `[44, 1729, 0, 0]` and `[44 | HARDENED, ...]` derive the same key.
pub fn derive_ed25519(seed: &Seed, path: &[u32]) -> Result<KeyPair, MnemonicError> {
    let mut node = slip10_hmac(SLIP10_ED25519_KEY, &[seed.as_bytes()])?;
    for &index in path {
        let (key, chain) = node.split_at(32);
        let hardened = (index | HARDENED).to_be_bytes();
        node = slip10_hmac(chain, &[&[0u8], key, &hardened])?;
    }

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&node[..32]);
    node.zeroize();

    let signing_key = SigningKey::from_bytes(&secret);
    let keypair = KeyPair {
        public: PublicKey(signing_key.verifying_key().to_bytes()),
        private: PrivateKey(secret),
    };
    secret.zeroize();
    Ok(keypair)
}

fn slip10_hmac(key: &[u8], parts: &[&[u8]]) -> Result<[u8; 64], MnemonicError> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| MnemonicError::DerivationFailed(e.to_string()))?;
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// BIP-32 secp256k1 derivation along a textual path such as `m/44'/144'/0'/0/0`.
pub fn derive_secp256k1(seed: &Seed, path: &str) -> Result<PrivateKey, MnemonicError> {
    let path: DerivationPath = path
        .parse()
        .map_err(|e: bip32::Error| MnemonicError::InvalidPath(e.to_string()))?;
    let xprv = XPrv::derive_from_path(seed.as_bytes(), &path)
        .map_err(|e| MnemonicError::DerivationFailed(e.to_string()))?;
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&xprv.private_key().to_bytes());
    Ok(PrivateKey(secret))
}
