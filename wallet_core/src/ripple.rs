//! Ripple wallets: account sequence, creation block and the reserve.

use tracing::debug;
use wk_ripple::{check_payment_amounts, xrp_to_drops, Account, Address, FeeBasis, Transfer};
use wk_types::{DirectedAmount, Timestamp, TxHash};

use crate::error::WalletError;
use crate::ledger::{Chain, LedgerAccount, LedgerTransfer, Replay, Wallet};

/// Base reserve an account must keep.
pub const MINIMUM_BALANCE_XRP: u64 = 20;

pub struct Ripple;

impl Chain for Ripple {
    type Address = Address;
    type Account = Account;
    type Transfer = Transfer;
    type FeeBasis = FeeBasis;

    const NAME: &'static str = "ripple";

    fn default_fee_basis() -> FeeBasis {
        FeeBasis::default()
    }

    fn balance_limit(as_maximum: bool) -> Option<u64> {
        (!as_maximum).then(|| xrp_to_drops(MINIMUM_BALANCE_XRP))
    }
}

impl LedgerTransfer for Transfer {
    type Address = Address;

    fn source(&self) -> &Address {
        Transfer::source(self)
    }

    fn target(&self) -> &Address {
        Transfer::target(self)
    }

    fn hash(&self) -> Option<TxHash> {
        Transfer::hash(self)
    }

    fn timestamp(&self) -> Timestamp {
        Transfer::timestamp(self)
    }

    fn block_height(&self) -> Option<u64> {
        Transfer::block_height(self)
    }

    fn has_error(&self) -> bool {
        Transfer::has_error(self)
    }

    fn amount_directed(&self, account: &Address) -> DirectedAmount {
        Transfer::amount_directed(self, account)
    }

    fn is_same(&self, other: &Self) -> bool {
        Transfer::is_same(self, other)
    }
}

impl LedgerAccount for Account {
    type Address = Address;

    fn address(&self) -> Address {
        Account::address(self)
    }

    fn apply_replay(&mut self, replay: &Replay) {
        self.set_sequence(u32::try_from(replay.sequence).unwrap_or(u32::MAX));
        self.set_block_number_at_creation(replay.block_height_at_creation);
    }
}

impl Wallet<Ripple> {
    /// A payment from this account using the next unused sequence.
    ///
    /// Fails when `amount` plus the fee leaves the native XRP range.
    pub fn create_transfer(
        &self,
        target: Address,
        amount: u64,
        fee_basis: FeeBasis,
        destination_tag: Option<u32>,
    ) -> Result<Transfer, WalletError> {
        check_payment_amounts(amount, fee_basis.fee())?;
        let account = self.account();
        let sequence = account.sequence().saturating_add(1);
        debug!(
            amount,
            sequence,
            fee = fee_basis.fee(),
            ?destination_tag,
            "creating ripple payment"
        );
        let transfer = Transfer::new_outgoing(account.address(), target, amount, fee_basis, sequence);
        Ok(match destination_tag {
            Some(tag) => transfer.with_destination_tag(tag),
            None => transfer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wk_ripple::{RippleError, MAX_DROPS};

    const PHRASE: &str =
        "patient doctor olympic frog force glimpse endless antenna online dragon bargain someone";

    fn wallet() -> Wallet<Ripple> {
        let seed = wk_crypto::seed_from_mnemonic(PHRASE, "").unwrap();
        Wallet::new(Account::from_seed(&seed).unwrap())
    }

    fn other() -> Address {
        Address::from_account_id([0x42; 20])
    }

    fn transfer(
        source: Address,
        target: Address,
        n: u8,
        block: Option<u64>,
        error: bool,
    ) -> Transfer {
        Transfer::recovered(
            source,
            target,
            1_000_000,
            12,
            TxHash::new([n; 32]),
            Timestamp::new(u64::from(n)),
            block,
            error,
        )
    }

    #[test]
    fn sequence_counts_included_or_successful_sends() {
        let w = wallet();
        let me = w.address();
        assert_eq!(me.to_string(), "r41vZ8exoVyUfVzs56yeN8xB5gDhSkho9a");
        w.add_transfer(&transfer(other(), me, 1, Some(100), false));
        w.add_transfer(&transfer(me, other(), 2, Some(101), false));
        // Failed but included: consumed a sequence.
        w.add_transfer(&transfer(me, other(), 3, Some(102), true));
        // Failed and never included: did not.
        w.add_transfer(&transfer(me, other(), 4, None, true));
        // Pending and not failed.
        w.add_transfer(&transfer(me, other(), 5, None, false));
        assert_eq!(w.sequence(), 3);
        assert_eq!(w.account().sequence(), 3);

        let next = w
            .create_transfer(other(), 5, FeeBasis::default(), Some(12))
            .unwrap();
        assert_eq!(next.transaction().unwrap().sequence(), 4);
        assert_eq!(next.destination_tag(), Some(12));
    }

    #[test]
    fn out_of_range_payment_is_rejected() {
        let w = wallet();
        let result = w.create_transfer(other(), u64::MAX / 2, FeeBasis::default(), None);
        assert!(matches!(
            result,
            Err(WalletError::Ripple(RippleError::AmountOutOfRange { .. }))
        ));

        let at_limit = MAX_DROPS - FeeBasis::default().fee();
        assert!(w.create_transfer(other(), at_limit, FeeBasis::default(), None).is_ok());
        assert!(w
            .create_transfer(other(), at_limit + 1, FeeBasis::default(), None)
            .is_err());
        assert!(w
            .create_transfer(other(), 1, FeeBasis::new(u64::MAX, 2), None)
            .is_err());
    }

    #[test]
    fn in_range_payment_signs() {
        let seed = wk_crypto::seed_from_mnemonic(PHRASE, "").unwrap();
        let w = wallet();
        let mut transfer = w
            .create_transfer(other(), MAX_DROPS - 10, FeeBasis::default(), None)
            .unwrap();
        let account = w.account();
        let size = transfer
            .transaction_mut()
            .unwrap()
            .serialize_and_sign(&account, &seed)
            .unwrap();
        assert!(size > 0);
        assert!(transfer.hash().is_some());
    }

    #[test]
    fn creation_block_is_lowest_successful_receipt() {
        let w = wallet();
        let me = w.address();
        assert_eq!(w.block_height_at_creation(), None);
        w.add_transfer(&transfer(other(), me, 1, Some(500), false));
        w.add_transfer(&transfer(other(), me, 2, Some(300), true));
        w.add_transfer(&transfer(other(), me, 3, Some(400), false));
        w.add_transfer(&transfer(other(), me, 4, None, false));
        assert_eq!(w.block_height_at_creation(), Some(400));
        assert_eq!(w.account().block_number_at_creation(), Some(400));
    }

    #[test]
    fn update_recomputes_after_failure() {
        let w = wallet();
        let me = w.address();
        let pending = transfer(me, other(), 1, None, false);
        w.add_transfer(&transfer(other(), me, 9, Some(1), false));
        w.add_transfer(&pending);
        assert_eq!(w.sequence(), 1);
        assert_eq!(w.balance(), -12);

        let mut failed = pending.clone();
        failed.set_confirmation(2, Timestamp::new(20), true);
        assert!(w.update_transfer(&failed));
        assert_eq!(w.sequence(), 1);
        assert_eq!(w.balance(), 999_988);

        assert!(w.remove_transfer(&failed));
        assert!(!w.remove_transfer(&failed));
        assert_eq!(w.sequence(), 0);
        assert_eq!(w.balance(), 1_000_000);
    }

    #[test]
    fn reserve_is_a_minimum_only() {
        let w = wallet();
        assert_eq!(w.balance_limit(false), Some(20_000_000));
        assert_eq!(w.balance_limit(true), None);
    }
}
