//! Signing failure shared by every chain's signer.

use thiserror::Error;

/// Raised when a transaction cannot be signed. The transaction being signed
/// is left exactly as it was before the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("seed does not derive the account's public key")]
    KeyMismatch,

    #[error("signing primitive failed: {0}")]
    Primitive(String),
}
