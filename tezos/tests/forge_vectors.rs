//! End-to-end forge and signing vectors for a known account.

use wk_crypto::{blake2b_256_multi, seed_from_mnemonic, verify_ed25519};
use wk_tezos::{
    Account, Address, BlockHash, FeeBasis, Operation, OperationKind, TezosError, Transaction,
    TransactionState,
};
use wk_types::{Signature, SignatureError};

const PHRASE: &str =
    "patient doctor olympic frog force glimpse endless antenna online dragon bargain someone";
const BRANCH: &str = "BMZck1BxBCkFHJNSDp6GZBYsawi5U6cQYdzipKK7EUTZCrsG74s";
const UNSIGNED: &str = "f3b761a633b2b0cc9d2edbb09cda4800818f893b3d6567b09a818f1a5f685fb8\
                        6c004cdee21a9180f80956ab8d27fb6abdbd89934052949a0303d84fac0280c2d72f\
                        0000d2e495a7ab40156d0a7c35b73d2530a3470fc87000";
const SIGNED_HASH: &str = "onwgTQgCHBPvTGFWmGrXzDMm3HQdJ4bvWwvv6LEEExmKy6CwMoo";

fn vector_transaction() -> Transaction {
    let source = Address::from_string("tz1SeV3tueHQMTfquZSU7y98otvQTw6GDKaY", true).unwrap();
    let target = Address::from_string("tz1es8RjqHUD483BN9APWtvCzgjTFVGeMh3y", true).unwrap();
    let basis = FeeBasis::from_estimate(OperationKind::Transaction, 48880, 1.0, 10200, 0, 3);
    Transaction::new(Operation::transaction(source, target, 100_000_000, basis))
}

fn branch() -> BlockHash {
    BlockHash::from_string(BRANCH).unwrap()
}

#[test]
fn unsigned_forge_matches_vector() {
    let tx = vector_transaction();
    assert_eq!(hex::encode(tx.forge(&branch())), UNSIGNED);
    // Forging twice yields identical bytes.
    assert_eq!(tx.forge(&branch()), tx.forge(&branch()));
}

#[test]
fn signed_transaction_matches_vector() {
    let seed = seed_from_mnemonic(PHRASE, "").unwrap();
    let account = Account::from_seed(&seed).unwrap();
    let mut tx = vector_transaction();

    let len = tx.serialize_and_sign(&account, &seed, &branch()).unwrap();
    let unsigned = hex::decode(UNSIGNED).unwrap();
    assert_eq!(len, unsigned.len() + 64);
    assert_eq!(tx.state(), TransactionState::Signed);
    assert_eq!(tx.hash().unwrap().to_string(), SIGNED_HASH);

    let signed = tx.serialization().unwrap();
    assert_eq!(&signed[..unsigned.len()], unsigned.as_slice());
    let signature = Signature(signed[unsigned.len()..].try_into().unwrap());
    let digest = blake2b_256_multi(&[&[0x03], &unsigned]);
    assert!(verify_ed25519(&digest, &signature, account.public_key()));
}

#[test]
fn estimate_then_sign_replaces_serialization() {
    let seed = seed_from_mnemonic(PHRASE, "").unwrap();
    let account = Account::from_seed(&seed).unwrap();
    let mut tx = vector_transaction();

    tx.serialize_for_fee_estimation(&branch());
    let estimate_hash = tx.hash().unwrap();
    tx.serialize_and_sign(&account, &seed, &branch()).unwrap();
    assert_ne!(tx.hash().unwrap(), estimate_hash);
    assert_eq!(tx.hash().unwrap().to_string(), SIGNED_HASH);
}

#[test]
fn failed_signing_leaves_transaction_unchanged() {
    let seed = seed_from_mnemonic(PHRASE, "").unwrap();
    let wrong = seed_from_mnemonic(PHRASE, "wrong").unwrap();
    let account = Account::from_seed(&seed).unwrap();
    let mut tx = vector_transaction();
    tx.serialize_for_fee_estimation(&branch());
    let before = tx.clone();

    let err = tx.serialize_and_sign(&account, &wrong, &branch()).unwrap_err();
    assert!(matches!(err, TezosError::Signature(SignatureError::KeyMismatch)));
    assert_eq!(tx, before);
}
