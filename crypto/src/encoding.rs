//! Checksummed text encodings for addresses, hashes and ids.
//!
//! - Base58Check: payload + first 4 bytes of SHA256d, bitcoin alphabet (Tezos)
//!   or ripple alphabet (Ripple).
//! - CB58: payload + last 4 bytes of SHA256, bitcoin alphabet (Avalanche ids).
//! - bech32: Avalanche X-chain addresses.
//!
//! Every decoder returns `None` on a bad character, bad checksum or bad
//! framing, never an error, since callers treat any of them as "not an address".

use bech32::{FromBase32, ToBase32, Variant};

use crate::hash::sha256;

const CB58_CHECKSUM_LEN: usize = 4;

/// Base58Check-encode `payload` with the bitcoin alphabet.
pub fn base58check_encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decode a Base58Check string, returning the payload without checksum.
pub fn base58check_decode(s: &str) -> Option<Vec<u8>> {
    bs58::decode(s).with_check(None).into_vec().ok()
}

/// Base58Check-encode `payload` with the ripple alphabet.
pub fn ripple_base58check_encode(payload: &[u8]) -> String {
    bs58::encode(payload)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check()
        .into_string()
}

pub fn ripple_base58check_decode(s: &str) -> Option<Vec<u8>> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(None)
        .into_vec()
        .ok()
}

/// CB58-encode `payload` (checksum is the trailing 4 bytes of SHA-256).
pub fn cb58_encode(payload: &[u8]) -> String {
    let digest = sha256(payload);
    let mut buf = Vec::with_capacity(payload.len() + CB58_CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&digest[32 - CB58_CHECKSUM_LEN..]);
    bs58::encode(buf).into_string()
}

pub fn cb58_decode(s: &str) -> Option<Vec<u8>> {
    let raw = bs58::decode(s).into_vec().ok()?;
    if raw.len() < CB58_CHECKSUM_LEN {
        return None;
    }
    let (payload, checksum) = raw.split_at(raw.len() - CB58_CHECKSUM_LEN);
    let digest = sha256(payload);
    (checksum == &digest[32 - CB58_CHECKSUM_LEN..]).then(|| payload.to_vec())
}

/// bech32-encode `data` under human-readable part `hrp`.
///
/// Returns `None` only for an invalid hrp.
pub fn bech32_encode(hrp: &str, data: &[u8]) -> Option<String> {
    bech32::encode(hrp, data.to_base32(), Variant::Bech32).ok()
}

/// Decode a bech32 string into `(hrp, data)`. bech32m strings are rejected.
pub fn bech32_decode(s: &str) -> Option<(String, Vec<u8>)> {
    let (hrp, words, variant) = bech32::decode(s).ok()?;
    if variant != Variant::Bech32 {
        return None;
    }
    let data = Vec::<u8>::from_base32(&words).ok()?;
    Some((hrp, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base58check_roundtrip() {
        let payload = [6u8, 161, 159, 1, 2, 3, 4, 5];
        let s = base58check_encode(&payload);
        assert_eq!(base58check_decode(&s).unwrap(), payload);
    }

    #[test]
    fn base58check_bad_checksum_rejected() {
        let s = base58check_encode(&[1u8, 2, 3, 4]);
        let mut chars: Vec<char> = s.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == '1' { '2' } else { '1' };
        let tampered: String = chars.into_iter().collect();
        assert!(base58check_decode(&tampered).is_none());
    }

    #[test]
    fn ripple_alphabet_differs_from_bitcoin() {
        let payload = [0u8; 21];
        let ripple = ripple_base58check_encode(&payload);
        assert!(ripple.starts_with('r'));
        assert_eq!(ripple_base58check_decode(&ripple).unwrap(), payload);
        assert!(base58check_decode(&ripple).is_none());
    }

    #[test]
    fn cb58_avalanche_mainnet_chain_id() {
        let id = hex::decode("ed5f38341e436e5d46e2bb00b45d62ae97d1b050c64bc634ae10626739e35c4b")
            .unwrap();
        let s = cb58_encode(&id);
        assert_eq!(s, "2oYMBNV4eNHyqk2fjjV5nVQLDbtmNJzq5s3qs3Lo6ftnC6FByM");
        assert_eq!(cb58_decode(&s).unwrap(), id);
    }

    #[test]
    fn cb58_rejects_bad_input() {
        assert!(cb58_decode("").is_none());
        assert!(cb58_decode("0OIl").is_none());
        assert!(cb58_decode("2oYMBNV4eNHyqk2fjjV5nVQLDbtmNJzq5s3qs3Lo6ftnC6FByN").is_none());
    }

    #[test]
    fn bech32_avalanche_address() {
        let hash = hex::decode("cc30e2015780a6c72efaef2280e3de4a954e770c").unwrap();
        let s = bech32_encode("avax", &hash).unwrap();
        assert_eq!(s, "avax1escwyq2hsznvwth6au3gpc77f225uacvwldgal");
        let (hrp, data) = bech32_decode(&s).unwrap();
        assert_eq!(hrp, "avax");
        assert_eq!(data, hash);
    }

    #[test]
    fn bech32_bad_checksum_rejected() {
        assert!(bech32_decode("avax1escwyq2hsznvwth6au3gpc77f225uacvwldgaq").is_none());
    }
}
