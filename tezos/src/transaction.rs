//! Operation groups: forging, fee-estimation serialization and signing.
//!
//! A transaction is one primary operation (transaction or delegation),
//! optionally preceded by a reveal of the source's public key. It moves
//! through three states:
//!
//! - **Built**: operations fixed, nothing serialized.
//! - **Estimated**: forged with a zero signature so a node can simulate it.
//! - **Signed**: forged and signed; the hash names the operation group.
//!
//! Re-serializing discards the previous serialization. Forging never mutates
//! the operations, so the same branch always yields the same bytes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wk_crypto::{blake2b_256_multi, Seed};
use wk_types::Signature;

use crate::account::Account;
use crate::error::TezosError;
use crate::fee_basis::OperationKind;
use crate::hash::{BlockHash, OperationHash};
use crate::operation::Operation;

/// Watermark prepended to a forged group before signing.
const GENERIC_OPERATION_WATERMARK: u8 = 0x03;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionState {
    Built,
    Estimated,
    Signed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    operations: Vec<Operation>,
    serialization: Option<Vec<u8>>,
    hash: Option<OperationHash>,
    state: TransactionState,
}

impl Transaction {
    /// # Panics
    ///
    /// Panics if `primary` is a reveal.
    pub fn new(primary: Operation) -> Self {
        Self::from_operations(vec![primary])
    }

    pub fn with_reveal(reveal: Operation, primary: Operation) -> Self {
        Self::from_operations(vec![reveal, primary])
    }

    /// Build from one or two operations in any order; a reveal is always
    /// placed first.
    ///
    /// # Panics
    ///
    /// Panics unless there is exactly one non-reveal operation, at most one
    /// reveal, a single source, and a reveal counter below the primary's.
    pub fn from_operations(mut operations: Vec<Operation>) -> Self {
        assert!(
            matches!(operations.len(), 1 | 2),
            "a transaction holds one or two operations, got {}",
            operations.len()
        );
        operations.sort_by_key(|op| !op.is_reveal());
        let primary = &operations[operations.len() - 1];
        assert!(!primary.is_reveal(), "a transaction needs a primary operation");
        if let [reveal, primary] = operations.as_slice() {
            assert!(reveal.is_reveal(), "only a reveal may precede the primary operation");
            assert_eq!(reveal.source, primary.source, "operations must share one source");
            assert!(
                reveal.counter() < primary.counter(),
                "reveal counter {} must precede primary counter {}",
                reveal.counter(),
                primary.counter()
            );
        }
        Self {
            operations,
            serialization: None,
            hash: None,
            state: TransactionState::Built,
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn primary(&self) -> &Operation {
        &self.operations[self.operations.len() - 1]
    }

    pub fn reveal(&self) -> Option<&Operation> {
        self.operations.first().filter(|op| op.is_reveal())
    }

    pub fn kind(&self) -> OperationKind {
        self.primary().kind()
    }

    /// Sum of every operation's fee and extra fee.
    pub fn fee(&self) -> u64 {
        self.operations.iter().map(|op| op.fee_basis.total_fee()).sum()
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn hash(&self) -> Option<OperationHash> {
        self.hash
    }

    /// The most recent serialization: zero-signed or signed bytes.
    pub fn serialization(&self) -> Option<&[u8]> {
        self.serialization.as_deref()
    }

    /// Branch followed by every forged operation.
    pub fn forge(&self, branch: &BlockHash) -> Vec<u8> {
        let mut buf = Vec::with_capacity(32 + 128 * self.operations.len());
        buf.extend_from_slice(branch.branch());
        for op in &self.operations {
            op.forge_into(&mut buf);
        }
        buf
    }

    fn attach(
        &mut self,
        mut bytes: Vec<u8>,
        signature: &Signature,
        state: TransactionState,
    ) -> usize {
        bytes.extend_from_slice(signature.as_bytes());
        let hash = OperationHash::of_signed_bytes(&bytes);
        let len = bytes.len();
        self.serialization = Some(bytes);
        self.hash = Some(hash);
        self.state = state;
        len
    }

    /// Forge with a zero signature so the node can size and simulate the
    /// group. Returns the serialized length in bytes.
    pub fn serialize_for_fee_estimation(&mut self, branch: &BlockHash) -> usize {
        let unsigned = self.forge(branch);
        let len = self.attach(unsigned, &Signature::ZERO, TransactionState::Estimated);
        debug!(len, kind = ?self.kind(), "serialized tezos transaction for fee estimation");
        len
    }

    /// Forge, sign with the key `seed` derives, and record the hash.
    ///
    /// On failure the transaction is left exactly as it was.
    pub fn serialize_and_sign(
        &mut self,
        account: &Account,
        seed: &Seed,
        branch: &BlockHash,
    ) -> Result<usize, TezosError> {
        let unsigned = self.forge(branch);
        let digest = blake2b_256_multi(&[&[GENERIC_OPERATION_WATERMARK], &unsigned]);
        let signature = account.sign(seed, &digest)?;
        let len = self.attach(unsigned, &signature, TransactionState::Signed);
        if let Some(hash) = &self.hash {
            info!(%hash, len, kind = ?self.kind(), "signed tezos transaction");
        }
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::fee_basis::FeeBasis;
    use wk_types::PublicKey;

    fn source() -> Address {
        Address::from_string("tz1SeV3tueHQMTfquZSU7y98otvQTw6GDKaY", true).unwrap()
    }

    fn target() -> Address {
        Address::from_string("tz1es8RjqHUD483BN9APWtvCzgjTFVGeMh3y", true).unwrap()
    }

    fn branch() -> BlockHash {
        BlockHash::from_string("BMZck1BxBCkFHJNSDp6GZBYsawi5U6cQYdzipKK7EUTZCrsG74s").unwrap()
    }

    fn transfer_op(counter: i64) -> Operation {
        let basis = FeeBasis::new(OperationKind::Transaction, 1500, 10_200, 300, counter, 0);
        Operation::transaction(source(), target(), 1000, basis)
    }

    fn reveal_op(counter: i64) -> Operation {
        let basis = FeeBasis::new(OperationKind::Reveal, 1420, 10_000, 0, counter, 0);
        Operation::reveal(source(), PublicKey([1; 32]), basis)
    }

    #[test]
    fn reveal_is_ordered_first() {
        let tx = Transaction::from_operations(vec![transfer_op(8), reveal_op(7)]);
        assert!(tx.operations()[0].is_reveal());
        assert_eq!(tx.kind(), OperationKind::Transaction);
        assert!(tx.reveal().is_some());
        assert_eq!(tx.fee(), 2920);
    }

    #[test]
    fn estimate_appends_zero_signature() {
        let mut tx = Transaction::new(transfer_op(3));
        assert_eq!(tx.state(), TransactionState::Built);
        assert!(tx.hash().is_none());
        let unsigned = tx.forge(&branch());
        let len = tx.serialize_for_fee_estimation(&branch());
        assert_eq!(len, unsigned.len() + 64);
        let bytes = tx.serialization().unwrap();
        assert!(bytes[unsigned.len()..].iter().all(|&b| b == 0));
        assert_eq!(tx.state(), TransactionState::Estimated);
        assert!(tx.hash().is_some());
    }

    #[test]
    fn serialization_is_repeatable() {
        let mut tx = Transaction::with_reveal(reveal_op(1), transfer_op(2));
        tx.serialize_for_fee_estimation(&branch());
        let first = tx.serialization().unwrap().to_vec();
        let first_hash = tx.hash();
        tx.serialize_for_fee_estimation(&branch());
        assert_eq!(tx.serialization().unwrap(), first.as_slice());
        assert_eq!(tx.hash(), first_hash);
        assert_eq!(tx.operations()[1].counter(), 2);
    }

    #[test]
    #[should_panic(expected = "must precede")]
    fn reveal_counter_must_be_lower() {
        Transaction::with_reveal(reveal_op(5), transfer_op(5));
    }

    #[test]
    #[should_panic(expected = "primary operation")]
    fn reveal_alone_is_rejected() {
        Transaction::new(reveal_op(1));
    }
}
