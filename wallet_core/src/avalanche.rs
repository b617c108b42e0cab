//! Avalanche X-chain wallets.

use tracing::debug;
use wk_avalanche::{Account, Address, BaseTx, FeeBasis, Network, Transfer, TransferInput};
use wk_types::{DirectedAmount, Timestamp, TxHash};

use crate::error::WalletError;
use crate::ledger::{Chain, LedgerAccount, LedgerTransfer, Wallet};

pub struct Avalanche;

impl Chain for Avalanche {
    type Address = Address;
    type Account = Account;
    type Transfer = Transfer;
    type FeeBasis = FeeBasis;

    const NAME: &'static str = "avalanche";

    fn default_fee_basis() -> FeeBasis {
        FeeBasis::default()
    }
}

impl LedgerTransfer for Transfer {
    type Address = Address;

    fn source(&self) -> &Address {
        Transfer::source(self)
    }

    fn target(&self) -> &Address {
        Transfer::target(self)
    }

    fn hash(&self) -> Option<TxHash> {
        Transfer::hash(self)
    }

    fn timestamp(&self) -> Timestamp {
        Transfer::timestamp(self)
    }

    fn block_height(&self) -> Option<u64> {
        Transfer::block_height(self)
    }

    fn has_error(&self) -> bool {
        Transfer::has_error(self)
    }

    fn amount_directed(&self, account: &Address) -> DirectedAmount {
        Transfer::amount_directed(self, account)
    }

    fn is_same(&self, other: &Self) -> bool {
        Transfer::is_same(self, other)
    }
}

impl LedgerAccount for Account {
    type Address = Address;

    fn address(&self) -> Address {
        Account::address(self)
    }
}

impl Wallet<Avalanche> {
    /// Spend from `utxos` to pay `amount` to `target`, change back to self.
    pub fn create_transfer(
        &self,
        network: &Network,
        target: Address,
        amount: u64,
        fee_basis: FeeBasis,
        utxos: &[TransferInput],
    ) -> Result<Transfer, WalletError> {
        let source = self.address();
        let base = BaseTx::transfer(network, utxos, source, target, amount, fee_basis.fee())?;
        debug!(
            amount,
            inputs = base.inputs.len(),
            outputs = base.outputs.len(),
            "creating avalanche transfer"
        );
        Ok(Transfer::new_outgoing(source, target, amount, fee_basis, base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wk_avalanche::{AvalancheError, MAINNET};

    const PHRASE: &str =
        "patient doctor olympic frog force glimpse endless antenna online dragon bargain someone";

    fn wallet() -> Wallet<Avalanche> {
        let seed = wk_crypto::seed_from_mnemonic(PHRASE, "").unwrap();
        Wallet::new(Account::from_seed(&seed).unwrap())
    }

    fn utxo(n: u8, amount: u64) -> TransferInput {
        TransferInput {
            tx_id: [n; 32],
            utxo_index: 0,
            asset_id: MAINNET.avax_asset_id,
            amount,
            address_indices: vec![0],
        }
    }

    #[test]
    fn wallet_address_matches_known_key() {
        let w = wallet();
        assert_eq!(
            w.address().to_string_on(&MAINNET),
            "X-avax1escwyq2hsznvwth6au3gpc77f225uacvwldgal"
        );
    }

    #[test]
    fn create_transfer_spends_utxos_with_change() {
        let w = wallet();
        let target = Address::from_short_id([7; 20]);
        let transfer = w
            .create_transfer(
                &MAINNET,
                target,
                2_500_000,
                FeeBasis::default(),
                &[utxo(1, 2_000_000), utxo(2, 3_000_000)],
            )
            .unwrap();
        let base = transfer.transaction().unwrap().base();
        assert_eq!(base.inputs.len(), 2);
        assert_eq!(base.outputs.len(), 2);
        assert_eq!(transfer.fee(), 1_000_000);
        assert_eq!(
            transfer.amount_directed(&w.address()),
            DirectedAmount::outgoing(3_500_000)
        );
    }

    #[test]
    fn create_transfer_rejects_overflowing_amount() {
        let w = wallet();
        let result = w.create_transfer(
            &MAINNET,
            w.address(),
            u64::MAX,
            FeeBasis::default(),
            &[utxo(1, 2_000_000)],
        );
        assert!(matches!(
            result,
            Err(WalletError::Avalanche(AvalancheError::AmountOverflow {
                amount: u64::MAX,
                fee: 1_000_000
            }))
        ));
    }

    #[test]
    fn create_transfer_reports_shortfall() {
        let w = wallet();
        let result = w.create_transfer(
            &MAINNET,
            Address::from_short_id([7; 20]),
            5_000_000,
            FeeBasis::default(),
            &[utxo(1, 2_000_000)],
        );
        assert!(matches!(
            result,
            Err(WalletError::Avalanche(AvalancheError::InsufficientFunds {
                needed: 6_000_000,
                available: 2_000_000
            }))
        ));
    }
}
