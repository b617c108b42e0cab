use proptest::prelude::*;
use wk_ripple::{Account, Address, FeeBasis, Transaction};
use wk_types::Secp256k1PublicKey;

fn public_key() -> Secp256k1PublicKey {
    let mut bytes = [0u8; 33];
    hex::decode_to_slice(
        "029dc79308883267bb49f3924e9eb58d60bcecd17ad3f2f53681ecc5c668b2ba5f",
        &mut bytes,
    )
    .unwrap();
    Secp256k1PublicKey::from_slice(&bytes).unwrap()
}

proptest! {
    #[test]
    fn classic_address_roundtrip(id in any::<[u8; 20]>()) {
        let address = Address::from_account_id(id);
        let text = address.to_string();
        prop_assert!(text.starts_with('r'));
        prop_assert_eq!(Address::from_string(&text, true), Some(address));
    }

    #[test]
    fn unsigned_encoding_is_deterministic(
        amount in 1u64..100_000_000_000,
        sequence in any::<u32>(),
        price in 1u64..1_000,
    ) {
        let account = Account::from_public_key(public_key());
        let target = Address::from_account_id([7; 20]);
        let tx = Transaction::payment(
            account.address(),
            target,
            amount,
            FeeBasis::new(price, 1),
            sequence,
        );
        let key = account.public_key().as_bytes().to_vec();
        let a = tx.encode(&key, None);
        let b = tx.encode(&key, None);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a[0], 0x12);
    }
}
