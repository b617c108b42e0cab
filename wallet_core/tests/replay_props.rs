//! Replay properties over arbitrary Ripple transfer histories.

use proptest::prelude::*;
use wk_ripple::{Account, Address, Transfer};
use wk_types::{Timestamp, TxHash};
use wk_wallet_core::{replay, Ripple, Wallet};

fn account() -> Account {
    let seed = wk_crypto::seed_from_mnemonic(
        "patient doctor olympic frog force glimpse endless antenna online dragon bargain someone",
        "",
    )
    .unwrap();
    Account::from_seed(&seed).unwrap()
}

fn history() -> impl Strategy<Value = Vec<(bool, u64, u64, Option<u64>, bool)>> {
    prop::collection::vec(
        (
            any::<bool>(),
            0u64..1_000_000,
            0u64..100,
            prop::option::of(0u64..1_000),
            any::<bool>(),
        ),
        0..16,
    )
}

fn transfers(me: Address, entries: &[(bool, u64, u64, Option<u64>, bool)]) -> Vec<Transfer> {
    let other = Address::from_account_id([0x55; 20]);
    entries.iter()
        .enumerate()
        .map(|(i, &(outgoing, amount, fee, block, error))| {
            let (source, target) = if outgoing { (me, other) } else { (other, me) };
            let mut hash = [0u8; 32];
            hash[..8].copy_from_slice(&(i as u64).to_be_bytes());
            Transfer::recovered(
                source,
                target,
                amount,
                fee,
                TxHash::new(hash),
                Timestamp::new(i as u64),
                block,
                error,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn insertion_order_does_not_matter(entries in history()) {
        let me = account().address();
        let list = transfers(me, &entries);

        let forward = Wallet::<Ripple>::new(account());
        for t in &list {
            forward.add_transfer(t);
        }
        let backward = Wallet::<Ripple>::new(account());
        for t in list.iter().rev() {
            backward.add_transfer(t);
        }

        prop_assert_eq!(forward.balance(), backward.balance());
        prop_assert_eq!(forward.sequence(), backward.sequence());
        prop_assert_eq!(forward.block_height_at_creation(), backward.block_height_at_creation());
        prop_assert_eq!(forward.balance(), replay(&list, &me).balance);
    }

    #[test]
    fn removing_everything_restores_the_empty_state(entries in history()) {
        let wallet = Wallet::<Ripple>::new(account());
        let list = transfers(wallet.address(), &entries);
        for t in &list {
            prop_assert!(wallet.add_transfer(t));
            prop_assert!(!wallet.add_transfer(t));
        }
        for t in &list {
            prop_assert!(wallet.remove_transfer(t));
        }
        prop_assert_eq!(wallet.balance(), 0);
        prop_assert_eq!(wallet.sequence(), 0);
        prop_assert_eq!(wallet.block_height_at_creation(), None);
        prop_assert_eq!(wallet.transfer_count(), 0);
    }
}
