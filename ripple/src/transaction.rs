//! XRP `Payment` transactions in the canonical binary format.
//!
//! Fields are written sorted by (type code, field code), each behind a field
//! header:
//!
//! | field              | type      | header  |
//! |--------------------|-----------|---------|
//! | TransactionType    | UInt16    | `12`    |
//! | Flags              | UInt32    | `22`    |
//! | Sequence           | UInt32    | `24`    |
//! | DestinationTag     | UInt32    | `2e`    |
//! | LastLedgerSequence | UInt32    | `20 1b` |
//! | Amount             | Amount    | `61`    |
//! | Fee                | Amount    | `68`    |
//! | SigningPubKey      | Blob      | `73`    |
//! | TxnSignature       | Blob      | `74`    |
//! | Account            | AccountID | `81`    |
//! | Destination        | AccountID | `83`    |
//!
//! The signing form omits `TxnSignature` and is hashed behind `STX\0`; the
//! transaction id hashes the signed form behind `TXN\0`.

use serde::{Deserialize, Serialize};
use tracing::info;
use wk_crypto::{sha512_half, Seed};
use wk_types::TxHash;

use crate::account::Account;
use crate::address::Address;
use crate::error::RippleError;
use crate::fee_basis::FeeBasis;

const SIGNING_PREFIX: [u8; 4] = *b"STX\0";
const TRANSACTION_ID_PREFIX: [u8; 4] = *b"TXN\0";

const PAYMENT: u16 = 0;
/// `tfFullyCanonicalSig`: only low-S signatures are valid.
pub const FLAG_FULLY_CANONICAL_SIG: u32 = 0x8000_0000;

const TYPE_UINT16: u8 = 1;
const TYPE_UINT32: u8 = 2;
const TYPE_AMOUNT: u8 = 6;
const TYPE_BLOB: u8 = 7;
const TYPE_ACCOUNT: u8 = 8;

/// Positive, native-XRP amount marker.
const NATIVE_POSITIVE: u64 = 0x4000_0000_0000_0000;
/// Largest amount of drops the native encoding allows (10^17).
pub const MAX_DROPS: u64 = 100_000_000_000_000_000;

/// Accept a payment only if `amount + fee` fits the native amount range.
pub fn check_payment_amounts(amount: u64, fee: u64) -> Result<(), RippleError> {
    match amount.checked_add(fee) {
        Some(total) if total <= MAX_DROPS => Ok(()),
        _ => Err(RippleError::AmountOutOfRange { amount, fee }),
    }
}

fn write_field_header(buf: &mut Vec<u8>, type_code: u8, field_code: u8) {
    match (type_code < 16, field_code < 16) {
        (true, true) => buf.push(type_code << 4 | field_code),
        (true, false) => buf.extend_from_slice(&[type_code << 4, field_code]),
        (false, true) => buf.extend_from_slice(&[field_code, type_code]),
        (false, false) => buf.extend_from_slice(&[0, type_code, field_code]),
    }
}

fn write_u32(buf: &mut Vec<u8>, field_code: u8, value: u32) {
    write_field_header(buf, TYPE_UINT32, field_code);
    buf.extend_from_slice(&value.to_be_bytes());
}

fn write_drops(buf: &mut Vec<u8>, field_code: u8, drops: u64) {
    assert!(drops <= MAX_DROPS, "{drops} drops exceeds the native amount range");
    write_field_header(buf, TYPE_AMOUNT, field_code);
    buf.extend_from_slice(&(NATIVE_POSITIVE | drops).to_be_bytes());
}

/// Variable-length prefix; payloads here never exceed 192 bytes.
fn write_blob(buf: &mut Vec<u8>, field_code: u8, blob: &[u8]) {
    assert!(blob.len() <= 192, "blob of {} bytes needs a multi-byte length", blob.len());
    write_field_header(buf, TYPE_BLOB, field_code);
    buf.push(blob.len() as u8);
    buf.extend_from_slice(blob);
}

fn write_account(buf: &mut Vec<u8>, field_code: u8, address: &Address) {
    write_field_header(buf, TYPE_ACCOUNT, field_code);
    buf.push(20);
    buf.extend_from_slice(address.account_id());
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    source: Address,
    target: Address,
    amount: u64,
    fee_basis: FeeBasis,
    sequence: u32,
    flags: u32,
    destination_tag: Option<u32>,
    last_ledger_sequence: Option<u32>,
    serialization: Option<Vec<u8>>,
    hash: Option<TxHash>,
}

impl Transaction {
    pub fn payment(
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
            fee_basis,
            sequence,
            flags: FLAG_FULLY_CANONICAL_SIG,
            destination_tag: None,
            last_ledger_sequence: None,
            serialization: None,
            hash: None,
        }
    }

    pub fn with_destination_tag(mut self, tag: u32) -> Self {
        self.destination_tag = Some(tag);
        self
    }

    pub fn with_last_ledger_sequence(mut self, ledger: u32) -> Self {
        self.last_ledger_sequence = Some(ledger);
        self
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
        self.fee_basis.fee()
    }

    pub fn fee_basis(&self) -> &FeeBasis {
        &self.fee_basis
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn destination_tag(&self) -> Option<u32> {
        self.destination_tag
    }

    pub fn last_ledger_sequence(&self) -> Option<u32> {
        self.last_ledger_sequence
    }

    pub fn hash(&self) -> Option<TxHash> {
        self.hash
    }

    pub fn serialization(&self) -> Option<&[u8]> {
        self.serialization.as_deref()
    }

    /// Canonical encoding; `signature` is `None` for the signing form.
    ///
    /// # Panics
    ///
    /// Panics on an amount or fee outside the native range.
    pub fn encode(&self, signing_key: &[u8], signature: Option<&[u8]>) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);
        write_field_header(&mut buf, TYPE_UINT16, 2);
        buf.extend_from_slice(&PAYMENT.to_be_bytes());
        write_u32(&mut buf, 2, self.flags);
        write_u32(&mut buf, 4, self.sequence);
        if let Some(tag) = self.destination_tag {
            write_u32(&mut buf, 14, tag);
        }
        if let Some(ledger) = self.last_ledger_sequence {
            write_u32(&mut buf, 27, ledger);
        }
        write_drops(&mut buf, 1, self.amount);
        write_drops(&mut buf, 8, self.fee());
        write_blob(&mut buf, 3, signing_key);
        if let Some(signature) = signature {
            write_blob(&mut buf, 4, signature);
        }
        write_account(&mut buf, 1, &self.source);
        write_account(&mut buf, 3, &self.target);
        buf
    }

    /// Hash the signing form, sign it, and store the signed bytes and the
    /// transaction id. On failure nothing changes.
    pub fn serialize_and_sign(
        &mut self,
        account: &Account,
        seed: &Seed,
    ) -> Result<usize, RippleError> {
        let signing_key = account.public_key().as_bytes();
        let mut signing = SIGNING_PREFIX.to_vec();
        signing.extend_from_slice(&self.encode(signing_key, None));
        let signature = account.sign(seed, &sha512_half(&signing))?;

        let signed = self.encode(signing_key, Some(&signature));
        let mut id_input = TRANSACTION_ID_PREFIX.to_vec();
        id_input.extend_from_slice(&signed);
        let hash = TxHash::new(sha512_half(&id_input));

        let len = signed.len();
        self.serialization = Some(signed);
        self.hash = Some(hash);
        info!(hash = %hex::encode_upper(hash.as_bytes()), len, "signed ripple payment");
        Ok(len)
    }
}
