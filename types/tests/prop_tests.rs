use proptest::prelude::*;

use wk_types::{DirectedAmount, Timestamp, TxHash};

proptest! {
    /// TxHash roundtrip: new -> as_bytes -> new produces identical hash.
    #[test]
    fn tx_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// TxHash::is_zero is true only for all-zero bytes.
    #[test]
    fn tx_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// TxHash Display output parses back through from_hex.
    #[test]
    fn tx_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(TxHash::from_hex(&hash.to_string()), Some(hash));
    }

    /// Persisted (bincode) encoding of a hash is the raw bytes.
    #[test]
    fn tx_hash_bincode_is_raw(bytes in prop::array::uniform32(0u8..)) {
        let encoded = bincode::serialize(&TxHash::new(bytes)).unwrap();
        prop_assert_eq!(encoded, bytes.to_vec());
    }

    /// Persisted timestamps are little-endian u64.
    #[test]
    fn timestamp_bincode_little_endian(secs in any::<u64>()) {
        let encoded = bincode::serialize(&Timestamp::new(secs)).unwrap();
        prop_assert_eq!(encoded, secs.to_le_bytes().to_vec());
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(Timestamp::new(a) <= Timestamp::new(b), a <= b);
    }

    /// Incoming and outgoing of the same value cancel.
    #[test]
    fn directed_amounts_cancel(v in any::<u64>()) {
        let net = DirectedAmount::incoming(v).signed() + DirectedAmount::outgoing(v).signed();
        prop_assert_eq!(net, 0);
    }
}
