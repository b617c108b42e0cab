//! A Tezos wallet from history replay through a signed transfer.

use wk_crypto::seed_from_mnemonic;
use wk_tezos::{Account, Address, BlockHash, OperationKind, OperationHash, Transfer};
use wk_types::{Timestamp, TxHash};
use wk_wallet_core::{Tezos, Wallet, WalletConfig};

const PHRASE: &str =
    "patient doctor olympic frog force glimpse endless antenna online dragon bargain someone";
const BRANCH: &str = "BMZck1BxBCkFHJNSDp6GZBYsawi5U6cQYdzipKK7EUTZCrsG74s";

#[test]
fn first_send_reveals_then_later_sends_do_not() {
    let seed = seed_from_mnemonic(PHRASE, "").unwrap();
    let wallet = Wallet::<Tezos>::new(Account::from_seed(&seed).unwrap());
    let config = WalletConfig::default();
    let target = Address::from_string("tz1es8RjqHUD483BN9APWtvCzgjTFVGeMh3y", true).unwrap();
    let branch = BlockHash::from_string(BRANCH).unwrap();

    wallet.add_transfer(&Transfer::recovered(
        target,
        wallet.address(),
        5_000_000,
        0,
        OperationHash::from(TxHash::new([1; 32])),
        Timestamp::new(1),
        Some(1),
        false,
    ));

    let fees = wallet.fee_basis_from_estimate(
        &config.tezos,
        OperationKind::Transaction,
        150,
        1_427,
        0,
        3,
    );
    assert!(fees.needs_reveal());
    let mut transfer = wallet.create_transfer(target, 1_000_000, fees).unwrap();
    let account = wallet.account();
    let size = transfer
        .transaction_mut()
        .unwrap()
        .serialize_and_sign(&account, &seed, &branch)
        .unwrap();
    assert!(size > 64);
    assert!(transfer.hash().is_some());

    assert!(wallet.add_transfer(&transfer));
    assert!(!wallet.needs_reveal());
    assert_eq!(
        wallet.balance(),
        5_000_000 - 1_000_000 - i128::from(fees.total_fee())
    );

    let next = wallet.fee_basis_from_estimate(
        &config.tezos,
        OperationKind::Transaction,
        150,
        1_427,
        0,
        5,
    );
    assert!(!next.needs_reveal());
    let hash = transfer.hash().unwrap().tx_hash();
    assert!(wallet.transfer_by_hash(&hash).is_some());
}
