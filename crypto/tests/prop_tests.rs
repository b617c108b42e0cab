use proptest::prelude::*;

use wk_crypto::{
    base58check_decode, base58check_encode, bech32_decode, bech32_encode, cb58_decode,
    cb58_encode, ripple_base58check_decode, ripple_base58check_encode,
};

proptest! {
    /// Base58Check decode inverts encode for any payload.
    #[test]
    fn base58check_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let s = base58check_encode(&payload);
        prop_assert_eq!(base58check_decode(&s), Some(payload));
    }

    /// Same property under the ripple alphabet.
    #[test]
    fn ripple_base58check_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let s = ripple_base58check_encode(&payload);
        prop_assert_eq!(ripple_base58check_decode(&s), Some(payload));
    }

    /// CB58 decode inverts encode.
    #[test]
    fn cb58_roundtrip(payload in prop::collection::vec(any::<u8>(), 1..64)) {
        let s = cb58_encode(&payload);
        prop_assert_eq!(cb58_decode(&s), Some(payload));
    }

    /// bech32 decode inverts encode for 20-byte address hashes.
    #[test]
    fn bech32_roundtrip(hash in prop::array::uniform20(any::<u8>())) {
        let s = bech32_encode("fuji", &hash).unwrap();
        let (hrp, data) = bech32_decode(&s).unwrap();
        prop_assert_eq!(hrp, "fuji");
        prop_assert_eq!(data, hash.to_vec());
    }

    /// Arbitrary text never panics a decoder.
    #[test]
    fn decoders_never_panic(s in "\\PC{0,60}") {
        let _ = base58check_decode(&s);
        let _ = ripple_base58check_decode(&s);
        let _ = cb58_decode(&s);
        let _ = bech32_decode(&s);
    }
}
