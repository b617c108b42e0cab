//! Tezos transfers: outgoing ones built by the wallet and historical ones
//! recovered from an indexer.

use serde::{Deserialize, Serialize};
use wk_types::{DirectedAmount, PublicKey, Timestamp};

use crate::address::Address;
use crate::fee_basis::{OperationKind, TransferFeeBasis};
use crate::hash::OperationHash;
use crate::operation::Operation;
use crate::transaction::Transaction;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transfer {
    source: Address,
    target: Address,
    amount: u64,
    fee: u64,
    hash: Option<OperationHash>,
    timestamp: Timestamp,
    block_height: Option<u64>,
    error: bool,
    fee_basis: Option<TransferFeeBasis>,
    transaction: Option<Transaction>,
}

impl Transfer {
    /// Build an outgoing transfer (or delegation, per the fee basis kind).
    ///
    /// When `fee_basis` carries a reveal, a reveal of `public_key` is placed
    /// ahead of the primary operation.
    pub fn new_outgoing(
        source: Address,
        target: Address,
        amount: u64,
        fee_basis: TransferFeeBasis,
        public_key: PublicKey,
    ) -> Self {
        let primary = match fee_basis.kind() {
            OperationKind::Delegation => Operation::delegation(source, target, fee_basis.primary),
            _ => Operation::transaction(source, target, amount, fee_basis.primary),
        };
        let transaction = match fee_basis.reveal {
            Some(reveal) => {
                Transaction::with_reveal(Operation::reveal(source, public_key, reveal), primary)
            }
            None => Transaction::new(primary),
        };
        Self {
            source,
            target,
            amount,
            fee: fee_basis.total_fee(),
            hash: None,
            timestamp: Timestamp::now(),
            block_height: None,
            error: false,
            fee_basis: Some(fee_basis),
            transaction: Some(transaction),
        }
    }

    /// A transfer observed on chain. Burns are recorded with an
    /// [`Address::UNKNOWN`] target and share their companion's hash.
    #[allow(clippy::too_many_arguments)]
    pub fn recovered(
        source: Address,
        target: Address,
        amount: u64,
        fee: u64,
        hash: OperationHash,
        timestamp: Timestamp,
        block_height: Option<u64>,
        error: bool,
    ) -> Self {
        Self {
            source,
            target,
            amount,
            fee,
            hash: Some(hash),
            timestamp,
            block_height,
            error,
            fee_basis: None,
            transaction: None,
        }
    }

    pub fn source(&self) -> &Address {
        &self.source
    }

    pub fn target(&self) -> &Address {
        &self.target
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn block_height(&self) -> Option<u64> {
        self.block_height
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn fee_basis(&self) -> Option<&TransferFeeBasis> {
        self.fee_basis.as_ref()
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    pub fn transaction_mut(&mut self) -> Option<&mut Transaction> {
        self.transaction.as_mut()
    }

    pub fn is_delegation(&self) -> bool {
        self.transaction
            .as_ref()
            .is_some_and(|tx| tx.kind() == OperationKind::Delegation)
    }

    /// The signed transaction's hash if there is one, else the recorded hash.
    pub fn hash(&self) -> Option<OperationHash> {
        self.transaction
            .as_ref()
            .and_then(Transaction::hash)
            .or(self.hash)
    }

    /// Record inclusion in a block, or failure on chain.
    pub fn set_confirmation(&mut self, block_height: u64, timestamp: Timestamp, error: bool) {
        self.block_height = Some(block_height);
        self.timestamp = timestamp;
        self.error = error;
    }

    /// Same hash and same target. A burn and its companion share a hash but
    /// differ in target.
    pub fn is_same(&self, other: &Self) -> bool {
        self.hash() == other.hash() && self.target == other.target
    }

    /// Contribution of this transfer to `account`'s balance.
    ///
    /// # Panics
    ///
    /// Panics if `account` is neither the source nor the target.
    pub fn amount_directed(&self, account: &Address) -> DirectedAmount {
        let is_source = self.source == *account;
        let is_target = self.target == *account;
        let amount = if self.error { 0 } else { self.amount };
        match (is_source, is_target) {
            (true, true) => DirectedAmount::outgoing(self.fee),
            (true, false) => DirectedAmount::spent(amount, self.fee),
            (false, true) => DirectedAmount::incoming(amount),
            (false, false) => panic!("transfer {:?} does not involve {account}", self.hash()),
        }
    }
}
