use thiserror::Error;
use wk_crypto::MnemonicError;
use wk_types::SignatureError;

#[derive(Debug, Error)]
pub enum TezosError {
    #[error("signing failed: {0}")]
    Signature(#[from] SignatureError),

    #[error("account derivation failed: {0}")]
    Derivation(#[from] MnemonicError),
}
