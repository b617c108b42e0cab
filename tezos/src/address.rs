//! Tezos implicit-account addresses.
//!
//! An address is 23 raw bytes: a 3-byte Base58Check prefix selecting the
//! curve (`tz1` ed25519, `tz2` secp256k1, `tz3` p256) followed by the 20-byte
//! Blake2b-160 public-key hash. Inside forged operations the prefix shrinks
//! to a one-byte curve tag.

use std::fmt;

use serde::{Deserialize, Serialize};
use wk_crypto::{base58check_decode, base58check_encode, blake2b_160};
use wk_types::address::{sentinel_bytes, FEE_MARKER, UNKNOWN_MARKER};
use wk_types::{AddressKind, PublicKey};

pub const ADDRESS_LEN: usize = 23;
const PREFIX_LEN: usize = 3;

/// Base58Check prefixes of the implicit account kinds.
pub const TZ1_PREFIX: [u8; 3] = [6, 161, 159];
pub const TZ2_PREFIX: [u8; 3] = [6, 161, 161];
pub const TZ3_PREFIX: [u8; 3] = [6, 161, 164];

/// Prefix table indexed by the forge tag.
const PREFIXES: [[u8; 3]; 3] = [TZ1_PREFIX, TZ2_PREFIX, TZ3_PREFIX];

const FEE_BYTES: [u8; ADDRESS_LEN] = sentinel_bytes(FEE_MARKER);
const UNKNOWN_BYTES: [u8; ADDRESS_LEN] = sentinel_bytes(UNKNOWN_MARKER);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Fee sink used when accounting for a transfer's fee.
    pub const FEE: Self = Self(FEE_BYTES);
    /// Placeholder for a counterparty that is not known.
    pub const UNKNOWN: Self = Self(UNKNOWN_BYTES);

    /// Wrap raw bytes, checking the prefix against the known account kinds.
    pub fn from_raw(bytes: [u8; ADDRESS_LEN]) -> Option<Self> {
        PREFIXES
            .iter()
            .any(|p| bytes[..PREFIX_LEN] == p[..])
            .then_some(Self(bytes))
    }

    /// The `tz1` address of an ed25519 public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[..PREFIX_LEN].copy_from_slice(&TZ1_PREFIX);
        bytes[PREFIX_LEN..].copy_from_slice(&blake2b_160(public_key.as_bytes()));
        Self(bytes)
    }

    /// Parse a `tz1`/`tz2`/`tz3` address.
    ///
    /// With `strict == false` the sentinel tokens `"__fee__"` and `"unknown"`
    /// are also accepted.
    pub fn from_string(s: &str, strict: bool) -> Option<Self> {
        if !strict {
            match AddressKind::from_token(s) {
                Some(AddressKind::Fee) => return Some(Self::FEE),
                Some(AddressKind::Unknown) => return Some(Self::UNKNOWN),
                _ => {}
            }
        }
        let raw: [u8; ADDRESS_LEN] = base58check_decode(s)?.try_into().ok()?;
        Self::from_raw(raw)
    }

    pub fn kind(&self) -> AddressKind {
        match self.0 {
            FEE_BYTES => AddressKind::Fee,
            UNKNOWN_BYTES => AddressKind::Unknown,
            _ => AddressKind::Standard,
        }
    }

    pub fn is_fee(&self) -> bool {
        self.kind() == AddressKind::Fee
    }

    pub fn is_unknown(&self) -> bool {
        self.kind() == AddressKind::Unknown
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn hash(&self) -> &[u8] {
        &self.0[PREFIX_LEN..]
    }

    /// Forge encoding: one curve tag byte followed by the 20-byte hash.
    ///
    /// # Panics
    ///
    /// Panics for sentinel addresses, which never appear on the wire.
    pub fn forge(&self) -> [u8; 21] {
        let tag = PREFIXES
            .iter()
            .position(|p| self.0[..PREFIX_LEN] == p[..])
            .unwrap_or_else(|| panic!("cannot forge non-account address {self}"));
        let mut out = [0u8; 21];
        out[0] = tag as u8;
        out[1..].copy_from_slice(self.hash());
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind().token() {
            Some(token) => f.write_str(token),
            None => f.write_str(&base58check_encode(&self.0)),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}
