//! Ripple classic addresses: version byte 0 plus a 20-byte account id,
//! Base58Check-encoded with the ripple alphabet (`r…`).

use std::fmt;

use serde::{Deserialize, Serialize};
use wk_crypto::{hash160, ripple_base58check_decode, ripple_base58check_encode};
use wk_types::address::{sentinel_bytes, FEE_MARKER, UNKNOWN_MARKER};
use wk_types::{AddressKind, Secp256k1PublicKey};

pub const ACCOUNT_ID_LEN: usize = 20;
const ACCOUNT_VERSION: u8 = 0;

const FEE_BYTES: [u8; ACCOUNT_ID_LEN] = sentinel_bytes(FEE_MARKER);
const UNKNOWN_BYTES: [u8; ACCOUNT_ID_LEN] = sentinel_bytes(UNKNOWN_MARKER);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; ACCOUNT_ID_LEN]);

impl Address {
    pub const FEE: Self = Self(FEE_BYTES);
    pub const UNKNOWN: Self = Self(UNKNOWN_BYTES);

    pub fn from_account_id(id: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(id)
    }

    /// Account id of a compressed secp256k1 key: RIPEMD160(SHA256(pk)).
    pub fn from_public_key(public_key: &Secp256k1PublicKey) -> Self {
        Self(hash160(public_key.as_bytes()))
    }

    /// Parse an `r…` address; `strict == false` also accepts the sentinel
    /// tokens.
    pub fn from_string(s: &str, strict: bool) -> Option<Self> {
        if !strict {
            match AddressKind::from_token(s) {
                Some(AddressKind::Fee) => return Some(Self::FEE),
                Some(AddressKind::Unknown) => return Some(Self::UNKNOWN),
                _ => {}
            }
        }
        let raw = ripple_base58check_decode(s)?;
        match raw.split_first() {
            Some((&ACCOUNT_VERSION, id)) => Some(Self(id.try_into().ok()?)),
            _ => None,
        }
    }

    pub fn kind(&self) -> AddressKind {
        match self.0 {
            FEE_BYTES => AddressKind::Fee,
            UNKNOWN_BYTES => AddressKind::Unknown,
            _ => AddressKind::Standard,
        }
    }

    pub fn account_id(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = self.kind().token() {
            return f.write_str(token);
        }
        let mut raw = Vec::with_capacity(ACCOUNT_ID_LEN + 1);
        raw.push(ACCOUNT_VERSION);
        raw.extend_from_slice(&self.0);
        f.write_str(&ripple_base58check_encode(&raw))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "r41vZ8exoVyUfVzs56yeN8xB5gDhSkho9a";

    #[test]
    fn known_address() {
        let addr = Address::from_string(ADDRESS, true).unwrap();
        assert_eq!(
            hex::encode(addr.account_id()),
            "effc2752b5c9da2288c5d01f304ec82951e37ca2"
        );
        assert_eq!(addr.to_string(), ADDRESS);
    }

    #[test]
    fn from_public_key() {
        let pk = hex::decode("032be3cee576036f9076596fc4f8d4a2a057f8f86548c0980e021316072feda2d3")
            .unwrap();
        let pk = Secp256k1PublicKey::from_slice(&pk).unwrap();
        assert_eq!(Address::from_public_key(&pk).to_string(), ADDRESS);
    }

    #[test]
    fn sentinels() {
        assert_eq!(Address::from_string("__fee__", false), Some(Address::FEE));
        assert_eq!(Address::from_string("__fee__", true), None);
        assert_eq!(Address::from_string("unknown", false), Some(Address::UNKNOWN));
        assert_eq!(Address::UNKNOWN.to_string(), "unknown");
        assert_eq!(Address::FEE.kind(), AddressKind::Fee);
    }

    #[test]
    fn wrong_version_or_alphabet_rejected() {
        let mut raw = vec![1u8];
        raw.extend_from_slice(&[7u8; 20]);
        assert_eq!(Address::from_string(&ripple_base58check_encode(&raw), true), None);
        let bitcoin = wk_crypto::base58check_encode(&[0u8; 21]);
        assert_eq!(Address::from_string(&bitcoin, true), None);
        assert_eq!(Address::from_string("", true), None);
    }
}
