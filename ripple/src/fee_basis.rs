//! Fixed-cost fee basis: `fee = price_per_cost_factor * cost_factor` drops.

use serde::{Deserialize, Serialize};

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

/// Ten drops for a single-signature payment.
impl Default for FeeBasis {
    fn default() -> Self {
        Self::new(10, 1)
    }
}
