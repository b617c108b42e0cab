use serde::{Deserialize, Serialize};
use wk_types::{DirectedAmount, Timestamp, TxHash};

use crate::address::Address;
use crate::fee_basis::FeeBasis;
use crate::transaction::Transaction;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transfer {
    source: Address,
    target: Address,
    amount: u64,
    fee: u64,
    hash: Option<TxHash>,
    timestamp: Timestamp,
    block_height: Option<u64>,
    error: bool,
    transaction: Option<Transaction>,
}

impl Transfer {
    /// An outgoing payment using `sequence` as its account sequence.
    pub fn new_outgoing(
        source: Address,
        target: Address,
        amount: u64,
        fee_basis: FeeBasis,
        sequence: u32,
    ) -> Self {
        Self {
            source,
            target,
            amount,
            fee: fee_basis.fee(),
            hash: None,
            timestamp: Timestamp::now(),
            block_height: None,
            error: false,
            transaction: Some(Transaction::payment(source, target, amount, fee_basis, sequence)),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn recovered(
        source: Address,
        target: Address,
        amount: u64,
        fee: u64,
        hash: TxHash,
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

    pub fn is_in_block(&self) -> bool {
        self.block_height.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    pub fn transaction_mut(&mut self) -> Option<&mut Transaction> {
        self.transaction.as_mut()
    }

    /// Attach a `DestinationTag` to the unsigned payment.
    pub fn with_destination_tag(mut self, tag: u32) -> Self {
        self.transaction = self.transaction.map(|tx| tx.with_destination_tag(tag));
        self
    }

    /// Bound the ledger the payment may be included in.
    pub fn with_last_ledger_sequence(mut self, ledger: u32) -> Self {
        self.transaction = self.transaction.map(|tx| tx.with_last_ledger_sequence(ledger));
        self
    }

    pub fn destination_tag(&self) -> Option<u32> {
        self.transaction.as_ref().and_then(Transaction::destination_tag)
    }

    pub fn hash(&self) -> Option<TxHash> {
        self.transaction
            .as_ref()
            .and_then(Transaction::hash)
            .or(self.hash)
    }

    pub fn set_confirmation(&mut self, block_height: u64, timestamp: Timestamp, error: bool) {
        self.block_height = Some(block_height);
        self.timestamp = timestamp;
        self.error = error;
    }

    /// Same transaction id, source and target.
    pub fn is_same(&self, other: &Self) -> bool {
        self.hash() == other.hash() && self.source == other.source && self.target == other.target
    }

    /// # Panics
    ///
    /// Panics if `account` is neither the source nor the target.
    pub fn amount_directed(&self, account: &Address) -> DirectedAmount {
        let amount = if self.error { 0 } else { self.amount };
        match (self.source == *account, self.target == *account) {
            (true, true) => DirectedAmount::outgoing(self.fee),
            (true, false) => DirectedAmount::spent(amount, self.fee),
            (false, true) => DirectedAmount::incoming(amount),
            (false, false) => panic!("transfer {:?} does not involve {account}", self.hash()),
        }
    }
}
