//! Tezos fee bases.
//!
//! A fee is priced from the operation's gas limit and its forged size:
//!
//! ```text
//! fee = 100 + 0.1 * gas_limit + 0.0 * storage_limit + size * max(1000, mutez_per_kbyte) / 1000
//! ```
//!
//! Storage is burned separately and never priced into the fee. Every
//! constructor clamps the gas and storage limits to the protocol minimums.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mutez paid by every operation regardless of size or gas.
pub const FEE_BASELINE: u64 = 100;
/// Fee used before a node estimate is available.
pub const FEE_DEFAULT: u64 = 1420;

pub const GAS_LIMIT_MINIMUM: i64 = 1000;
pub const GAS_LIMIT_MAXIMUM: i64 = 1_040_000;
pub const STORAGE_LIMIT_MINIMUM: i64 = 300;
pub const STORAGE_LIMIT_MAXIMUM: i64 = 60_000;

const SIZE_FEE_RATE: u64 = 1000;
/// Mutez per unit of storage limit; storage is burned, not paid as fee.
const STORAGE_FEE_RATE: u64 = 0;
const MARGIN_MINIMUM_PERCENT: u32 = 10;
const ESTIMATE_PADDING_PERCENT: u64 = 105;
const DEFAULT_TX_SIZE: u64 = 225;

/// Operation kinds with their forge tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OperationKind {
    Endorsement = 0x00,
    Reveal = 0x6b,
    Transaction = 0x6c,
    Delegation = 0x6e,
}

impl OperationKind {
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn default_fee(self) -> u64 {
        match self {
            Self::Endorsement => 0,
            Self::Reveal | Self::Transaction | Self::Delegation => FEE_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBasis {
    pub kind: OperationKind,
    pub fee: u64,
    pub gas_limit: i64,
    pub storage_limit: i64,
    pub counter: i64,
    /// Burned alongside the fee (e.g. storage for a new account); never forged.
    pub fee_extra: u64,
}

fn with_margin(value: i64, percent: u32) -> i64 {
    (100 + i64::from(percent)) * value / 100
}

/// Fee for an operation of `size_in_bytes` with the given limits.
pub fn compute_fee(
    mutez_per_kbyte: u64,
    size_in_bytes: usize,
    gas_limit: i64,
    storage_limit: i64,
) -> u64 {
    let gas_fee = (gas_limit.max(0) / 10) as u64;
    let storage_fee = storage_limit.max(0) as u64 * STORAGE_FEE_RATE;
    let size_fee = mutez_per_kbyte.max(SIZE_FEE_RATE) * size_in_bytes as u64 / 1000;
    FEE_BASELINE + gas_fee + storage_fee + size_fee
}

/// Price per kilobyte that makes a default-sized operation cost `fee`.
pub fn invert_fee(fee: u64) -> u64 {
    1000 * fee / DEFAULT_TX_SIZE
}

impl FeeBasis {
    pub fn new(
        kind: OperationKind,
        fee: u64,
        gas_limit: i64,
        storage_limit: i64,
        counter: i64,
        fee_extra: u64,
    ) -> Self {
        Self {
            kind,
            fee,
            gas_limit: gas_limit.max(GAS_LIMIT_MINIMUM),
            storage_limit: storage_limit.max(STORAGE_LIMIT_MINIMUM),
            counter,
            fee_extra,
        }
    }

    /// A fee known after the fact, e.g. read back from an indexer.
    pub fn actual(kind: OperationKind, fee: u64, fee_extra: u64) -> Self {
        Self::new(kind, fee, 0, 0, 0, fee_extra)
    }

    pub fn empty(kind: OperationKind) -> Self {
        Self::new(kind, 0, 0, 0, 0, 0)
    }

    /// Starting point for a node fee estimate: maximum limits, default fee.
    pub fn default_for(kind: OperationKind) -> Self {
        Self::new(
            kind,
            kind.default_fee(),
            GAS_LIMIT_MAXIMUM,
            STORAGE_LIMIT_MAXIMUM,
            0,
            0,
        )
    }

    /// Fee basis priced from a forged size in kilobytes, padded by 5%.
    ///
    /// A zero size means the operation has not been forged yet and yields the
    /// default fee.
    pub fn from_estimate(
        kind: OperationKind,
        mutez_per_kbyte: u64,
        size_in_kbytes: f64,
        gas_limit: i64,
        storage_limit: i64,
        counter: i64,
    ) -> Self {
        let fee = if size_in_kbytes == 0.0 {
            FEE_DEFAULT
        } else {
            let size_fee = (mutez_per_kbyte as f64 * size_in_kbytes) as u64;
            let minimal = FEE_BASELINE + (gas_limit.max(0) / 10) as u64 + size_fee;
            minimal * ESTIMATE_PADDING_PERCENT / 100
        };
        Self::new(kind, fee, gas_limit, storage_limit, counter, 0)
    }

    /// Rebuild a fee basis from a node's run-operation result.
    ///
    /// The node reports the current counter; the operation must use the next
    /// one. Consumed gas and storage are padded by 10%.
    pub fn recover_from_estimate(
        kind: OperationKind,
        mutez_per_kbyte: u64,
        size_in_bytes: usize,
        consumed_gas: i64,
        storage_size: i64,
        counter: i64,
    ) -> Self {
        let gas_limit = with_margin(consumed_gas, MARGIN_MINIMUM_PERCENT);
        let storage_limit = with_margin(storage_size, MARGIN_MINIMUM_PERCENT);
        let basis = Self::from_estimate(
            kind,
            mutez_per_kbyte,
            size_in_bytes as f64 / 1000.0,
            gas_limit,
            storage_limit,
            counter + 1,
        );
        debug!(
            ?kind,
            fee = basis.fee,
            gas_limit = basis.gas_limit,
            storage_limit = basis.storage_limit,
            counter = basis.counter,
            "recovered fee basis from node estimate"
        );
        basis
    }

    /// Pad a best-estimate basis by `margin_percent` (at least 10%).
    ///
    /// The price, gas and storage are all margined to recompute the fee, but
    /// only the margined gas limit is kept; the storage limit is unchanged.
    pub fn apply_margin(
        &self,
        mutez_per_kbyte: u64,
        size_in_bytes: usize,
        margin_percent: u32,
    ) -> Self {
        let margin = margin_percent.max(MARGIN_MINIMUM_PERCENT);
        let price = with_margin(mutez_per_kbyte as i64, margin) as u64;
        let gas_limit = with_margin(self.gas_limit, margin);
        let storage_limit = with_margin(self.storage_limit, margin);
        Self::new(
            self.kind,
            compute_fee(price, size_in_bytes, gas_limit, storage_limit),
            gas_limit,
            self.storage_limit,
            self.counter,
            self.fee_extra,
        )
    }

    pub fn total_fee(&self) -> u64 {
        self.fee + self.fee_extra
    }
}

/// Fee basis for a wallet transfer: the primary operation plus, for an
/// unrevealed account, the reveal that must precede it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFeeBasis {
    pub primary: FeeBasis,
    pub reveal: Option<FeeBasis>,
}

impl TransferFeeBasis {
    pub fn new(primary: FeeBasis) -> Self {
        Self {
            primary,
            reveal: None,
        }
    }

    /// Prepend a reveal priced like the primary operation.
    ///
    /// The reveal takes the primary's counter and the primary moves to the
    /// next one.
    pub fn with_reveal(primary: FeeBasis) -> Self {
        let reveal = FeeBasis {
            kind: OperationKind::Reveal,
            fee_extra: 0,
            ..primary
        };
        Self {
            primary: FeeBasis {
                counter: primary.counter + 1,
                ..primary
            },
            reveal: Some(reveal),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.primary.kind
    }

    pub fn needs_reveal(&self) -> bool {
        self.reveal.is_some()
    }

    /// Primary fee plus extra, plus the reveal's fee when present.
    pub fn total_fee(&self) -> u64 {
        self.primary.total_fee() + self.reveal.map_or(0, |r| r.total_fee())
    }
}
