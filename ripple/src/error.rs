use thiserror::Error;
use wk_crypto::MnemonicError;
use wk_types::SignatureError;

#[derive(Debug, Error)]
pub enum RippleError {
    #[error("signing failed: {0}")]
    Signature(#[from] SignatureError),

    #[error("account derivation failed: {0}")]
    Derivation(#[from] MnemonicError),

    #[error("payment of {amount} drops plus fee {fee} exceeds the native amount range")]
    AmountOutOfRange { amount: u64, fee: u64 },
}
