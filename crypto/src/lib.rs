//! Cryptographic primitives for the WalletKit chain crates.
//!
//! - **Blake2b** (Tezos addresses, signing digests, operation hashes)
//! - **SHA-256 / SHA-512Half / RIPEMD-160** (Ripple and Avalanche)
//! - **Ed25519** via SLIP-10 derivation, **secp256k1** via BIP-32
//! - Base58Check (bitcoin and ripple alphabets), CB58 and bech32 encodings

pub mod encoding;
pub mod hash;
pub mod keys;
pub mod mnemonic;
pub mod sign;

pub use encoding::{
    base58check_decode, base58check_encode, bech32_decode, bech32_encode, cb58_decode,
    cb58_encode, ripple_base58check_decode, ripple_base58check_encode,
};
pub use hash::{
    blake2b_160, blake2b_256, blake2b_256_multi, hash160, sha256, sha256d, sha512_half,
};
pub use keys::{keypair_from_private, public_from_private, secp256k1_public_from_private};
pub use mnemonic::{
    derive_ed25519, derive_secp256k1, seed_from_mnemonic, validate_mnemonic, MnemonicError,
    Seed,
};
pub use sign::{
    recover_secp256k1, sign_ed25519, sign_secp256k1_der, sign_secp256k1_recoverable,
    verify_ed25519, verify_secp256k1_der,
};
