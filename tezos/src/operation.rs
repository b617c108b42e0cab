//! Manager operations and their forged encoding.
//!
//! ```text
//! operation := kind | source | fee | counter | gas_limit | storage_limit | payload
//! ```
//!
//! All integers are Zarith naturals; addresses use the 21-byte forge form.

use serde::{Deserialize, Serialize};
use wk_types::PublicKey;

use crate::address::Address;
use crate::fee_basis::{FeeBasis, OperationKind};
use crate::zarith::{encode_zarith_signed, write_zarith};

/// Curve tag preceding a revealed public key.
const ED25519_KEY_TAG: u8 = 0x00;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationPayload {
    Reveal { public_key: PublicKey },
    Transaction { target: Address, amount: u64 },
    /// `None` withdraws the current delegate.
    Delegation { target: Option<Address> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub source: Address,
    pub fee_basis: FeeBasis,
    pub payload: OperationPayload,
}

fn assert_kind(fee_basis: &FeeBasis, kind: OperationKind) {
    assert_eq!(
        fee_basis.kind, kind,
        "fee basis kind {:?} does not match {:?} operation",
        fee_basis.kind, kind
    );
}

fn write_bool(buf: &mut Vec<u8>, value: bool) {
    buf.push(if value { 0xff } else { 0x00 });
}

impl Operation {
    /// # Panics
    ///
    /// Panics unless `fee_basis` is a transaction fee basis.
    pub fn transaction(source: Address, target: Address, amount: u64, fee_basis: FeeBasis) -> Self {
        assert_kind(&fee_basis, OperationKind::Transaction);
        Self {
            source,
            fee_basis,
            payload: OperationPayload::Transaction { target, amount },
        }
    }

    /// Delegate `source` to `target`. Delegating to oneself withdraws the
    /// delegate instead.
    ///
    /// # Panics
    ///
    /// Panics unless `fee_basis` is a delegation fee basis.
    pub fn delegation(source: Address, target: Address, fee_basis: FeeBasis) -> Self {
        assert_kind(&fee_basis, OperationKind::Delegation);
        let target = (target != source).then_some(target);
        Self {
            source,
            fee_basis,
            payload: OperationPayload::Delegation { target },
        }
    }

    /// # Panics
    ///
    /// Panics unless `fee_basis` is a reveal fee basis.
    pub fn reveal(source: Address, public_key: PublicKey, fee_basis: FeeBasis) -> Self {
        assert_kind(&fee_basis, OperationKind::Reveal);
        Self {
            source,
            fee_basis,
            payload: OperationPayload::Reveal { public_key },
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self.payload {
            OperationPayload::Reveal { .. } => OperationKind::Reveal,
            OperationPayload::Transaction { .. } => OperationKind::Transaction,
            OperationPayload::Delegation { .. } => OperationKind::Delegation,
        }
    }

    pub fn is_reveal(&self) -> bool {
        self.kind() == OperationKind::Reveal
    }

    pub fn counter(&self) -> i64 {
        self.fee_basis.counter
    }

    /// Append the forged bytes of this operation to `buf`.
    ///
    /// # Panics
    ///
    /// Panics on a negative limit or counter, or when the fee basis names an
    /// endorsement.
    pub fn forge_into(&self, buf: &mut Vec<u8>) {
        assert!(
            self.fee_basis.kind != OperationKind::Endorsement,
            "endorsements are never forged by a wallet"
        );
        let basis = &self.fee_basis;
        buf.push(self.kind().tag());
        buf.extend_from_slice(&self.source.forge());
        write_zarith(buf, basis.fee);
        buf.extend_from_slice(&encode_zarith_signed(basis.counter));
        buf.extend_from_slice(&encode_zarith_signed(basis.gas_limit));
        buf.extend_from_slice(&encode_zarith_signed(basis.storage_limit));

        match &self.payload {
            OperationPayload::Reveal { public_key } => {
                buf.push(ED25519_KEY_TAG);
                buf.extend_from_slice(public_key.as_bytes());
            }
            OperationPayload::Transaction { target, amount } => {
                write_zarith(buf, *amount);
                // Implicit account target; smart contracts are not supported.
                write_bool(buf, false);
                buf.extend_from_slice(&target.forge());
                // No contract parameters.
                write_bool(buf, false);
            }
            OperationPayload::Delegation { target } => match target {
                Some(target) => {
                    write_bool(buf, true);
                    buf.extend_from_slice(&target.forge());
                }
                None => write_bool(buf, false),
            },
        }
    }

    pub fn forge(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.forge_into(&mut buf);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Address {
        Address::from_string("tz1SeV3tueHQMTfquZSU7y98otvQTw6GDKaY", true).unwrap()
    }

    fn target() -> Address {
        Address::from_string("tz1es8RjqHUD483BN9APWtvCzgjTFVGeMh3y", true).unwrap()
    }

    #[test]
    fn transaction_forge_vector() {
        let basis = FeeBasis::from_estimate(OperationKind::Transaction, 48880, 1.0, 10200, 0, 3);
        let op = Operation::transaction(source(), target(), 100_000_000, basis);
        assert_eq!(
            hex::encode(op.forge()),
            "6c004cdee21a9180f80956ab8d27fb6abdbd89934052949a0303d84fac0280c2d72f\
             0000d2e495a7ab40156d0a7c35b73d2530a3470fc87000"
        );
    }

    #[test]
    fn reveal_forges_tagged_key() {
        let basis = FeeBasis::new(OperationKind::Reveal, 1420, 10_000, 0, 3, 0);
        let op = Operation::reveal(source(), PublicKey([0xaa; 32]), basis);
        let bytes = op.forge();
        assert_eq!(bytes[0], 0x6b);
        assert_eq!(bytes[bytes.len() - 33], ED25519_KEY_TAG);
        assert_eq!(&bytes[bytes.len() - 32..], &[0xaa; 32]);
    }

    #[test]
    fn delegation_to_self_withdraws() {
        let basis = FeeBasis::default_for(OperationKind::Delegation);
        let op = Operation::delegation(source(), source(), basis);
        assert_eq!(op.payload, OperationPayload::Delegation { target: None });
        let bytes = op.forge();
        assert_eq!(bytes[0], 0x6e);
        assert_eq!(*bytes.last().unwrap(), 0x00);

        let op = Operation::delegation(source(), target(), basis);
        let bytes = op.forge();
        assert_eq!(bytes[bytes.len() - 22], 0xff);
        assert_eq!(&bytes[bytes.len() - 21..], &target().forge());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn kind_mismatch_panics() {
        let basis = FeeBasis::default_for(OperationKind::Delegation);
        Operation::transaction(source(), target(), 1, basis);
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn negative_counter_panics() {
        let mut basis = FeeBasis::default_for(OperationKind::Transaction);
        basis.counter = -1;
        Operation::transaction(source(), target(), 1, basis).forge();
    }

    #[test]
    #[should_panic(expected = "endorsements")]
    fn endorsement_never_forged() {
        let op = Operation {
            source: source(),
            fee_basis: FeeBasis::default_for(OperationKind::Endorsement),
            payload: OperationPayload::Delegation { target: None },
        };
        op.forge();
    }
}
