//! Address kinds shared across chains.
//!
//! Every chain address is either a real account or one of two accounting
//! sentinels: the network fee sink and a placeholder for transfers whose
//! counterparty is not known.

use serde::{Deserialize, Serialize};

/// Classifies an address as a real account or an accounting sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    /// A real, checksummed account address.
    Standard,
    /// Fees paid to the network.
    Fee,
    /// Counterparty unavailable (e.g. a burn recorded by an indexer).
    Unknown,
}

impl AddressKind {
    /// String token for the fee sentinel.
    pub const FEE_TOKEN: &'static str = "__fee__";
    /// String token for the unknown sentinel.
    pub const UNKNOWN_TOKEN: &'static str = "unknown";

    /// Map a sentinel token to its kind. Returns `None` for anything else.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            Self::FEE_TOKEN => Some(Self::Fee),
            Self::UNKNOWN_TOKEN => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The literal token for a sentinel kind.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::Fee => Some(Self::FEE_TOKEN),
            Self::Unknown => Some(Self::UNKNOWN_TOKEN),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Standard)
    }
}

/// Raw marker stored in a fee-sentinel address.
pub const FEE_MARKER: &[u8] = b"BRD__fee__BRD";
/// Raw marker stored in an unknown-sentinel address.
pub const UNKNOWN_MARKER: &[u8] = b"BRD__unknown__BRD";

/// Zero-padded raw bytes for a sentinel address of width `N`.
pub const fn sentinel_bytes<const N: usize>(marker: &[u8]) -> [u8; N] {
    assert!(marker.len() <= N);
    let mut bytes = [0u8; N];
    let mut i = 0;
    while i < marker.len() {
        bytes[i] = marker[i];
        i += 1;
    }
    bytes
}
