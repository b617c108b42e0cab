//! X-chain base transactions.
//!
//! ```text
//! base_tx := codec u16 | type_id u32 | network_id u32 | blockchain_id [32]
//!            | n u32 | outputs | m u32 | inputs | memo_len u32 | memo
//! output  := asset_id [32] | type_id u32 | amount u64 | locktime u64
//!            | threshold u32 | k u32 | addresses [20]*k
//! input   := tx_id [32] | utxo_index u32 | asset_id [32] | type_id u32
//!            | amount u64 | k u32 | address_indices u32*k
//! ```
//!
//! Everything is big-endian. Encoded outputs, and separately encoded inputs,
//! are sorted by their raw bytes, so the order they were added in never
//! changes the result.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wk_crypto::{cb58_encode, sha256, Seed};
use wk_types::{RecoverableSignature, TxHash};

use crate::account::Account;
use crate::address::Address;
use crate::error::AvalancheError;
use crate::network::Network;

pub const CODEC_VERSION: u16 = 0;
pub const BASE_TX_TYPE_ID: u32 = 0;
pub const TRANSFER_OUTPUT_TYPE_ID: u32 = 7;
pub const TRANSFER_INPUT_TYPE_ID: u32 = 5;
pub const CREDENTIAL_TYPE_ID: u32 = 9;

const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x1AAvalanche Signed Message:\n";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    pub asset_id: [u8; 32],
    pub amount: u64,
    pub locktime: u64,
    pub threshold: u32,
    pub addresses: Vec<Address>,
}

impl TransferOutput {
    /// Spendable now by a single owner.
    pub fn to_owner(asset_id: [u8; 32], amount: u64, owner: Address) -> Self {
        Self {
            asset_id,
            amount,
            locktime: 0,
            threshold: 1,
            addresses: vec![owner],
        }
    }

    fn encode(&self) -> Vec<u8> {
        let mut addresses = self.addresses.clone();
        addresses.sort();
        let mut buf = Vec::with_capacity(60 + 20 * addresses.len());
        buf.extend_from_slice(&self.asset_id);
        buf.extend_from_slice(&TRANSFER_OUTPUT_TYPE_ID.to_be_bytes());
        buf.extend_from_slice(&self.amount.to_be_bytes());
        buf.extend_from_slice(&self.locktime.to_be_bytes());
        buf.extend_from_slice(&self.threshold.to_be_bytes());
        buf.extend_from_slice(&(addresses.len() as u32).to_be_bytes());
        for address in &addresses {
            buf.extend_from_slice(address.short_id());
        }
        buf
    }
}

/// An unspent output being consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    pub tx_id: [u8; 32],
    pub utxo_index: u32,
    pub asset_id: [u8; 32],
    pub amount: u64,
    pub address_indices: Vec<u32>,
}

impl TransferInput {
    fn encode(&self) -> Vec<u8> {
        let mut indices = self.address_indices.clone();
        indices.sort_unstable();
        let mut buf = Vec::with_capacity(84 + 4 * indices.len());
        buf.extend_from_slice(&self.tx_id);
        buf.extend_from_slice(&self.utxo_index.to_be_bytes());
        buf.extend_from_slice(&self.asset_id);
        buf.extend_from_slice(&TRANSFER_INPUT_TYPE_ID.to_be_bytes());
        buf.extend_from_slice(&self.amount.to_be_bytes());
        buf.extend_from_slice(&(indices.len() as u32).to_be_bytes());
        for index in &indices {
            buf.extend_from_slice(&index.to_be_bytes());
        }
        buf
    }

    /// Number of signatures its credential must carry.
    fn signature_count(&self) -> usize {
        self.address_indices.len()
    }
}

fn sorted_encodings<T>(items: &[T], encode: impl Fn(&T) -> Vec<u8>) -> Vec<Vec<u8>> {
    let mut encoded: Vec<Vec<u8>> = items.iter().map(encode).collect();
    encoded.sort();
    encoded
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTx {
    pub network_id: u32,
    pub blockchain_id: [u8; 32],
    pub outputs: Vec<TransferOutput>,
    pub inputs: Vec<TransferInput>,
    pub memo: Vec<u8>,
}

impl BaseTx {
    pub fn new(network: &Network) -> Self {
        Self {
            network_id: network.network_id,
            blockchain_id: network.blockchain_id,
            outputs: Vec::new(),
            inputs: Vec::new(),
            memo: Vec::new(),
        }
    }

    /// Spend `utxos` (oldest first, owned by `source`) to pay `amount` to
    /// `target` plus `fee`, returning any change to `source`.
    ///
    /// An `amount + fee` that does not fit in a `u64` is an
    /// [`AvalancheError::AmountOverflow`].
    pub fn transfer(
        network: &Network,
        utxos: &[TransferInput],
        source: Address,
        target: Address,
        amount: u64,
        fee: u64,
    ) -> Result<Self, AvalancheError> {
        let needed = amount
            .checked_add(fee)
            .ok_or(AvalancheError::AmountOverflow { amount, fee })?;
        let mut tx = Self::new(network);
        let mut gathered: u128 = 0;
        for utxo in utxos.iter().filter(|u| u.asset_id == network.avax_asset_id) {
            if gathered >= u128::from(needed) {
                break;
            }
            gathered += u128::from(utxo.amount);
            tx.inputs.push(utxo.clone());
        }
        // Below `needed` the total fits in a u64. Above it, the change is
        // less than the last UTXO spent.
        let Some(change) = gathered.checked_sub(u128::from(needed)) else {
            return Err(AvalancheError::InsufficientFunds {
                needed,
                available: gathered as u64,
            });
        };
        tx.outputs
            .push(TransferOutput::to_owner(network.avax_asset_id, amount, target));
        if change > 0 {
            tx.outputs.push(TransferOutput::to_owner(
                network.avax_asset_id,
                change as u64,
                source,
            ));
        }
        Ok(tx)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&CODEC_VERSION.to_be_bytes());
        buf.extend_from_slice(&BASE_TX_TYPE_ID.to_be_bytes());
        buf.extend_from_slice(&self.network_id.to_be_bytes());
        buf.extend_from_slice(&self.blockchain_id);

        buf.extend_from_slice(&(self.outputs.len() as u32).to_be_bytes());
        for output in sorted_encodings(&self.outputs, TransferOutput::encode) {
            buf.extend_from_slice(&output);
        }
        buf.extend_from_slice(&(self.inputs.len() as u32).to_be_bytes());
        for input in sorted_encodings(&self.inputs, TransferInput::encode) {
            buf.extend_from_slice(&input);
        }
        buf.extend_from_slice(&(self.memo.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.memo);
        buf
    }

    /// Inputs in serialized order; credentials must follow the same order.
    fn inputs_in_order(&self) -> Vec<&TransferInput> {
        let mut inputs: Vec<(Vec<u8>, &TransferInput)> =
            self.inputs.iter().map(|i| (i.encode(), i)).collect();
        inputs.sort_by(|a, b| a.0.cmp(&b.0));
        inputs.into_iter().map(|(_, input)| input).collect()
    }

    /// One credential per input, each holding the same signature once per
    /// address index.
    fn encode_credentials(&self, signature: &RecoverableSignature) -> Vec<u8> {
        let inputs = self.inputs_in_order();
        let mut buf = Vec::new();
        buf.extend_from_slice(&(inputs.len() as u32).to_be_bytes());
        for input in inputs {
            buf.extend_from_slice(&CREDENTIAL_TYPE_ID.to_be_bytes());
            buf.extend_from_slice(&(input.signature_count() as u32).to_be_bytes());
            for _ in 0..input.signature_count() {
                buf.extend_from_slice(signature.as_bytes());
            }
        }
        buf
    }
}

/// Digest a payload is signed over: SHA-256 of the signed-message prefix,
/// the big-endian payload length and the payload.
pub fn signing_digest(payload: &[u8]) -> [u8; 32] {
    let mut message = Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + 4 + payload.len());
    message.extend_from_slice(SIGNED_MESSAGE_PREFIX);
    message.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    message.extend_from_slice(payload);
    sha256(&message)
}

/// CB58 rendering of a transaction id.
pub fn tx_id_string(hash: &TxHash) -> String {
    cb58_encode(hash.as_bytes())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    base: BaseTx,
    serialization: Option<Vec<u8>>,
    hash: Option<TxHash>,
}

impl Transaction {
    pub fn new(base: BaseTx) -> Self {
        Self {
            base,
            serialization: None,
            hash: None,
        }
    }

    pub fn base(&self) -> &BaseTx {
        &self.base
    }

    pub fn hash(&self) -> Option<TxHash> {
        self.hash
    }

    pub fn serialization(&self) -> Option<&[u8]> {
        self.serialization.as_deref()
    }

    fn attach(&mut self, unsigned: Vec<u8>, signature: &RecoverableSignature) -> usize {
        let mut signed = unsigned;
        signed.extend_from_slice(&self.base.encode_credentials(signature));
        let hash = TxHash::new(sha256(&signed));
        let len = signed.len();
        self.serialization = Some(signed);
        self.hash = Some(hash);
        len
    }

    /// Serialize with zeroed signatures, for sizing.
    pub fn serialize_for_fee_estimation(&mut self) -> usize {
        let unsigned = self.base.encode();
        let len = self.attach(unsigned, &RecoverableSignature::ZERO);
        debug!(len, "serialized avalanche transaction for fee estimation");
        len
    }

    /// Sign and serialize. On failure nothing changes.
    pub fn serialize_and_sign(
        &mut self,
        account: &Account,
        seed: &Seed,
    ) -> Result<usize, AvalancheError> {
        let unsigned = self.base.encode();
        let signature = account.sign(seed, &signing_digest(&unsigned))?;
        let len = self.attach(unsigned, &signature);
        if let Some(hash) = &self.hash {
            info!(tx_id = %tx_id_string(hash), len, "signed avalanche transaction");
        }
        Ok(len)
    }
}
