//! Per-chain wallets over Tezos, Ripple and Avalanche.
//!
//! [`Wallet`] holds every transfer involving one account and replays them to
//! derive the balance and chain-specific state. Each chain plugs in through
//! [`Chain`]; chain-specific operations live on `Wallet<Tezos>`,
//! `Wallet<Ripple>` and `Wallet<Avalanche>`.

pub mod avalanche;
pub mod config;
pub mod error;
pub mod ledger;
pub mod persist;
pub mod ripple;
pub mod tezos;

pub use avalanche::Avalanche;
pub use config::{AvalancheConfig, RippleConfig, TezosConfig, WalletConfig};
pub use error::{ConfigError, WalletError};
pub use ledger::{replay, Chain, LedgerAccount, LedgerTransfer, Replay, Wallet};
pub use ripple::Ripple;
pub use tezos::Tezos;
