//! Value types shared by every chain crate in the workspace.
//!
//! Keys, signatures, transaction hashes, timestamps, directed amounts and the
//! sentinel address kinds live here so that the chain crates (`wk-tezos`,
//! `wk-ripple`, `wk-avalanche`) and the wallet ledger agree on them.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod keys;
pub mod network;
pub mod time;

pub use address::AddressKind;
pub use amount::{DirectedAmount, Direction};
pub use error::SignatureError;
pub use hash::TxHash;
pub use keys::{
    KeyPair, PrivateKey, PublicKey, RecoverableSignature, Secp256k1PublicKey, Signature,
};
pub use network::NetworkId;
pub use time::Timestamp;
