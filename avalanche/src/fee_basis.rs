use serde::{Deserialize, Serialize};

/// Fixed-cost fee basis in nAVAX.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeBasis {
    pub price_per_cost_factor: u64,
    pub cost_factor: u32,
}

impl FeeBasis {
    pub fn new(price_per_cost_factor: u64, cost_factor: u32) -> Self {
        Self {
            price_per_cost_factor,
            cost_factor,
        }
    }

    pub fn fee(&self) -> u64 {
        self.price_per_cost_factor
            .saturating_mul(u64::from(self.cost_factor))
    }
}

/// The X-chain base transaction fee, 0.001 AVAX.
impl Default for FeeBasis {
    fn default() -> Self {
        Self::new(1_000_000, 1)
    }
}
