//! Ripple (XRP) support: classic `r…` addresses, the fixed-cost fee basis,
//! canonical `Payment` encoding and secp256k1 DER signing.

pub mod account;
pub mod address;
pub mod error;
pub mod fee_basis;
pub mod transaction;
pub mod transfer;

pub use account::Account;
pub use address::Address;
pub use error::RippleError;
pub use fee_basis::FeeBasis;
pub use transaction::{check_payment_amounts, Transaction, MAX_DROPS};
pub use transfer::Transfer;

/// Drops per XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

pub const fn xrp_to_drops(xrp: u64) -> u64 {
    xrp * DROPS_PER_XRP
}
