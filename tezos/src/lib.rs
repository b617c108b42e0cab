//! Tezos support: `tz` addresses, fee bases, manager-operation forging and
//! ed25519 signing.
//!
//! A wallet transfer becomes an operation group: an optional reveal of the
//! account's public key followed by one transaction or delegation. The group
//! is forged against a branch (a recent block hash), signed over a
//! watermarked Blake2b digest, and named by its `o…` operation hash.

pub mod account;
pub mod address;
pub mod error;
pub mod fee_basis;
pub mod hash;
pub mod operation;
pub mod transaction;
pub mod transfer;
pub mod zarith;

pub use account::Account;
pub use address::Address;
pub use error::TezosError;
pub use fee_basis::{FeeBasis, OperationKind, TransferFeeBasis};
pub use hash::{BlockHash, OperationHash};
pub use operation::{Operation, OperationPayload};
pub use transaction::{Transaction, TransactionState};
pub use transfer::Transfer;
pub use zarith::{decode_zarith, encode_zarith, encode_zarith_signed};
