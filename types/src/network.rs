//! Network identifier.

use serde::{Deserialize, Serialize};

/// Which network a wallet's chain accounts belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    #[default]
    Mainnet,
    /// The public test network (Tezos ghostnet, Ripple testnet, Avalanche fuji).
    Testnet,
}

impl NetworkId {
    /// Human-readable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}
