//! Tezos wallets: reveal tracking and transfer creation.

use tracing::{debug, warn};
use wk_tezos::{Account, Address, FeeBasis, OperationKind, Transfer, TransferFeeBasis};
use wk_types::{DirectedAmount, Timestamp, TxHash};

use crate::config::TezosConfig;
use crate::error::WalletError;
use crate::ledger::{Chain, LedgerAccount, LedgerTransfer, Wallet};

pub struct Tezos;

impl Chain for Tezos {
    type Address = Address;
    type Account = Account;
    type Transfer = Transfer;
    type FeeBasis = TransferFeeBasis;

    const NAME: &'static str = "tezos";

    fn default_fee_basis() -> TransferFeeBasis {
        TransferFeeBasis::new(FeeBasis::default_for(OperationKind::Transaction))
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
        Transfer::hash(self).map(|h| h.tx_hash())
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
}

impl Wallet<Tezos> {
    /// Whether the next outgoing operation must be preceded by a reveal.
    pub fn needs_reveal(&self) -> bool {
        self.replay_state().needs_reveal
    }

    /// Fee basis for the next operation from a node's run-operation result,
    /// padded by the configured margin. Adds a reveal when one is needed and
    /// the operation is a transaction.
    pub fn fee_basis_from_estimate(
        &self,
        config: &TezosConfig,
        kind: OperationKind,
        size_in_bytes: usize,
        consumed_gas: i64,
        storage_size: i64,
        counter: i64,
    ) -> TransferFeeBasis {
        let estimate = FeeBasis::recover_from_estimate(
            kind,
            config.mutez_per_kbyte,
            size_in_bytes,
            consumed_gas,
            storage_size,
            counter,
        );
        let primary =
            estimate.apply_margin(config.mutez_per_kbyte, size_in_bytes, config.fee_margin_percent);
        if kind == OperationKind::Transaction && self.needs_reveal() {
            TransferFeeBasis::with_reveal(primary)
        } else {
            TransferFeeBasis::new(primary)
        }
    }

    /// Build an outgoing transfer, or a delegation when `fee_basis` is for one.
    ///
    /// A transaction carries a reveal exactly when the account still needs
    /// one; delegations never do. A fee basis that disagrees is rejected.
    pub fn create_transfer(
        &self,
        target: Address,
        amount: u64,
        fee_basis: TransferFeeBasis,
    ) -> Result<Transfer, WalletError> {
        let expected = fee_basis.kind() == OperationKind::Transaction && self.needs_reveal();
        let supplied = fee_basis.needs_reveal();
        if expected != supplied {
            warn!(expected, supplied, "reveal in fee basis disagrees with wallet state");
            return Err(WalletError::ReplayInconsistency { expected, supplied });
        }
        let account = self.account();
        debug!(kind = ?fee_basis.kind(), amount, reveal = supplied, "creating tezos transfer");
        Ok(Transfer::new_outgoing(
            account.address(),
            target,
            amount,
            fee_basis,
            *account.public_key(),
        ))
    }
}
