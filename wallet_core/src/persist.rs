//! Transfer records on disk.
//!
//! Records use bincode's default little-endian fixed-width layout, unrelated
//! to any chain's wire format.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::WalletError;
use crate::ledger::{Chain, Wallet};

impl<C: Chain> Wallet<C>
where
    C::Transfer: Serialize + DeserializeOwned,
{
    /// Encode every held transfer.
    pub fn save_transfers(&self) -> Result<Vec<u8>, WalletError> {
        let transfers = self.transfers();
        let bytes =
            bincode::serialize(&transfers).map_err(|e| WalletError::Persistence(e.to_string()))?;
        debug!(chain = C::NAME, count = transfers.len(), bytes = bytes.len(), "saved transfers");
        Ok(bytes)
    }

    /// Decode records written by [`Wallet::save_transfers`] and add each one.
    ///
    /// Returns how many were new.
    pub fn load_transfers(&self, bytes: &[u8]) -> Result<usize, WalletError> {
        let transfers: Vec<C::Transfer> =
            bincode::deserialize(bytes).map_err(|e| WalletError::Persistence(e.to_string()))?;
        Ok(transfers.iter().filter(|t| self.add_transfer(t)).count())
    }
}
