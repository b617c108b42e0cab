//! X-chain addresses: the 20-byte RIPEMD160(SHA256(pk)) short id, rendered
//! as bech32 under the network's hrp with an optional `X-` label.

use std::fmt;

use serde::{Deserialize, Serialize};
use wk_crypto::{bech32_decode, bech32_encode, hash160};
use wk_types::address::{sentinel_bytes, FEE_MARKER, UNKNOWN_MARKER};
use wk_types::{AddressKind, Secp256k1PublicKey};

use crate::network::Network;

pub const SHORT_ID_LEN: usize = 20;

const FEE_BYTES: [u8; SHORT_ID_LEN] = sentinel_bytes(FEE_MARKER);
const UNKNOWN_BYTES: [u8; SHORT_ID_LEN] = sentinel_bytes(UNKNOWN_MARKER);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; SHORT_ID_LEN]);

impl Address {
    pub const FEE: Self = Self(FEE_BYTES);
    pub const UNKNOWN: Self = Self(UNKNOWN_BYTES);

    pub fn from_short_id(id: [u8; SHORT_ID_LEN]) -> Self {
        Self(id)
    }

    pub fn from_public_key(public_key: &Secp256k1PublicKey) -> Self {
        Self(hash160(public_key.as_bytes()))
    }

    /// Parse `X-avax1…` or `avax1…` on `network`.
    ///
    /// Non-strict parsing maps the sentinel tokens, and the empty string, to
    /// sentinels.
    pub fn from_string(network: &Network, s: &str, strict: bool) -> Option<Self> {
        if !strict {
            if s.is_empty() {
                return Some(Self::UNKNOWN);
            }
            match AddressKind::from_token(s) {
                Some(AddressKind::Fee) => return Some(Self::FEE),
                Some(AddressKind::Unknown) => return Some(Self::UNKNOWN),
                _ => {}
            }
        }
        let s = s.strip_prefix(network.label).unwrap_or(s);
        let (hrp, data) = bech32_decode(s)?;
        if hrp != network.hrp {
            return None;
        }
        Some(Self(data.try_into().ok()?))
    }

    /// Labelled bech32 form on `network`, or the sentinel token.
    pub fn to_string_on(&self, network: &Network) -> String {
        if let Some(token) = self.kind().token() {
            return token.to_string();
        }
        match bech32_encode(network.hrp, &self.0) {
            Some(encoded) => format!("{}{}", network.label, encoded),
            None => String::new(),
        }
    }

    pub fn kind(&self) -> AddressKind {
        match self.0 {
            FEE_BYTES => AddressKind::Fee,
            UNKNOWN_BYTES => AddressKind::Unknown,
            _ => AddressKind::Standard,
        }
    }

    pub fn short_id(&self) -> &[u8; SHORT_ID_LEN] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind().token() {
            Some(token) => write!(f, "Address({token})"),
            None => {
                f.write_str("Address(")?;
                for byte in &self.0 {
                    write!(f, "{byte:02x}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_on(&crate::network::MAINNET))
    }
}
