use thiserror::Error;
use wk_avalanche::AvalancheError;
use wk_ripple::RippleError;
use wk_tezos::TezosError;

#[derive(Debug, Error)]
pub enum WalletError {
    /// The supplied fee basis disagrees with what replaying the wallet's
    /// transfers says about the account (e.g. a reveal for a revealed key).
    #[error("fee basis does not match wallet state: reveal expected {expected}, supplied {supplied}")]
    ReplayInconsistency { expected: bool, supplied: bool },

    #[error("tezos: {0}")]
    Tezos(#[from] TezosError),

    #[error("ripple: {0}")]
    Ripple(#[from] RippleError),

    #[error("avalanche: {0}")]
    Avalanche(#[from] AvalancheError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("persisted transfers unreadable: {0}")]
    Persistence(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("invalid TOML: {0}")]
    Parse(String),

    #[error("cannot serialize config: {0}")]
    Serialize(String),
}
