use thiserror::Error;
use wk_crypto::MnemonicError;
use wk_types::SignatureError;

#[derive(Debug, Error)]
pub enum AvalancheError {
    #[error("signing failed: {0}")]
    Signature(#[from] SignatureError),

    #[error("account derivation failed: {0}")]
    Derivation(#[from] MnemonicError),

    #[error("insufficient funds: need {needed} nAVAX, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("amount {amount} plus fee {fee} nAVAX exceeds the 64-bit range")]
    AmountOverflow { amount: u64, fee: u64 },
}
