//! Wallet configuration with TOML file support.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use wk_avalanche::Network;
use wk_types::NetworkId;
use wk_utils::LogFormat;

use crate::error::ConfigError;

/// Configuration shared by a set of chain wallets.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub network: NetworkId,

    #[serde(default)]
    pub tezos: TezosConfig,

    #[serde(default)]
    pub ripple: RippleConfig,

    #[serde(default)]
    pub avalanche: AvalancheConfig,

    /// "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TezosConfig {
    /// Margin applied over node estimates; values under 10 are raised to 10.
    #[serde(default = "default_tezos_margin")]
    pub fee_margin_percent: u32,

    #[serde(default = "default_tezos_mutez_per_kbyte")]
    pub mutez_per_kbyte: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RippleConfig {
    /// Drops per cost unit.
    #[serde(default = "default_ripple_price")]
    pub price_per_cost_factor: u64,

    #[serde(default = "default_cost_factor")]
    pub cost_factor: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvalancheConfig {
    /// nAVAX per cost unit.
    #[serde(default = "default_avalanche_price")]
    pub price_per_cost_factor: u64,

    #[serde(default = "default_cost_factor")]
    pub cost_factor: u32,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tezos_margin() -> u32 {
    10
}

fn default_tezos_mutez_per_kbyte() -> u64 {
    1000
}

fn default_ripple_price() -> u64 {
    10
}

fn default_avalanche_price() -> u64 {
    1_000_000
}

fn default_cost_factor() -> u32 {
    1
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Install the global subscriber for this configuration's format and
    /// level. Returns `false` if one is already installed.
    pub fn init_logging(&self) -> bool {
        let installed = wk_utils::try_init_logging(self.log_format, &self.log_level);
        if installed {
            info!(network = self.network.as_str(), level = %self.log_level, "logging initialised");
        }
        installed
    }

    /// X-chain parameters for the configured network.
    pub fn avalanche_network(&self) -> &'static Network {
        Network::for_id(self.network)
    }
}

impl RippleConfig {
    pub fn fee_basis(&self) -> wk_ripple::FeeBasis {
        wk_ripple::FeeBasis::new(self.price_per_cost_factor, self.cost_factor)
    }
}

impl AvalancheConfig {
    pub fn fee_basis(&self) -> wk_avalanche::FeeBasis {
        wk_avalanche::FeeBasis::new(self.price_per_cost_factor, self.cost_factor)
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            tezos: TezosConfig::default(),
            ripple: RippleConfig::default(),
            avalanche: AvalancheConfig::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for TezosConfig {
    fn default() -> Self {
        Self {
            fee_margin_percent: default_tezos_margin(),
            mutez_per_kbyte: default_tezos_mutez_per_kbyte(),
        }
    }
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            price_per_cost_factor: default_ripple_price(),
            cost_factor: default_cost_factor(),
        }
    }
}

impl Default for AvalancheConfig {
    fn default() -> Self {
        Self {
            price_per_cost_factor: default_avalanche_price(),
            cost_factor: default_cost_factor(),
        }
    }
}
