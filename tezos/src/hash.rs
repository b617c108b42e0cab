//! Operation and block hashes in their Base58Check forms (`o…`, `B…`).

use std::fmt;

use serde::{Deserialize, Serialize};
use wk_crypto::{base58check_decode, base58check_encode, blake2b_256};
use wk_types::TxHash;

const OPERATION_PREFIX: [u8; 2] = [5, 116];
const BLOCK_PREFIX: [u8; 2] = [1, 52];

fn decode_prefixed(s: &str, prefix: &[u8; 2]) -> Option<[u8; 32]> {
    let raw = base58check_decode(s)?;
    if raw.len() != 34 || raw[..2] != prefix[..] {
        return None;
    }
    raw[2..].try_into().ok()
}

fn encode_prefixed(prefix: &[u8; 2], digest: &[u8; 32]) -> String {
    let mut raw = Vec::with_capacity(34);
    raw.extend_from_slice(prefix);
    raw.extend_from_slice(digest);
    base58check_encode(&raw)
}

/// Hash of a signed operation group: Blake2b-256 of the signed bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationHash(TxHash);

impl OperationHash {
    pub fn of_signed_bytes(signed: &[u8]) -> Self {
        Self(TxHash::new(blake2b_256(signed)))
    }

    pub fn from_string(s: &str) -> Option<Self> {
        decode_prefixed(s, &OPERATION_PREFIX).map(|d| Self(TxHash::new(d)))
    }

    pub fn tx_hash(&self) -> TxHash {
        self.0
    }
}

impl From<TxHash> for OperationHash {
    fn from(hash: TxHash) -> Self {
        Self(hash)
    }
}

impl fmt::Display for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_prefixed(&OPERATION_PREFIX, self.0.as_bytes()))
    }
}

impl fmt::Debug for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperationHash({self})")
    }
}

/// A block hash; operations name the head block they build on as their branch.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    pub fn from_string(s: &str) -> Option<Self> {
        decode_prefixed(s, &BLOCK_PREFIX).map(Self)
    }

    /// The 32 raw bytes that open a forged operation group.
    pub fn branch(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_prefixed(&BLOCK_PREFIX, &self.0))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({self})")
    }
}
