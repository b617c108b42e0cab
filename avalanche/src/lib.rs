//! Avalanche X-chain support: bech32 addresses, the network table, base
//! transaction serialization with canonical output/input ordering, and
//! recoverable secp256k1 signing.

pub mod account;
pub mod address;
pub mod error;
pub mod fee_basis;
pub mod network;
pub mod transaction;
pub mod transfer;

pub use account::Account;
pub use address::Address;
pub use error::AvalancheError;
pub use fee_basis::FeeBasis;
pub use network::{Network, FUJI, MAINNET};
pub use transaction::{tx_id_string, BaseTx, Transaction, TransferInput, TransferOutput};
pub use transfer::Transfer;
