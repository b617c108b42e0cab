//! Digest helpers used by the chain serializers and address codecs.

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};
use ripemd::Ripemd160;
use sha2::{Sha256, Sha512};

type Blake2b256 = Blake2b<U32>;
type Blake2b160 = Blake2b<U20>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// 160-bit Blake2b, the Tezos public-key hash.
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Blake2b160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// Double SHA-256, the Base58Check checksum hash.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First half of SHA-512. Ripple's signing and transaction-id hash.
pub fn sha512_half(data: &[u8]) -> [u8; 32] {
    let full = Sha512::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&full[..32]);
    out
}

/// RIPEMD-160(SHA-256(data)): account ids for Ripple and Avalanche.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut output = [0u8; 20];
    output.copy_from_slice(&Ripemd160::digest(sha256(data)));
    output
}
