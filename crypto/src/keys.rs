//! Public-key derivation for ed25519 and secp256k1 private keys.

use ed25519_dalek::SigningKey;
use wk_types::{KeyPair, PrivateKey, PublicKey, Secp256k1PublicKey, SignatureError};

/// Derive the ed25519 public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let signing_key = SigningKey::from_bytes(&private.0);
    let verifying_key = signing_key.verifying_key();
    PublicKey(verifying_key.to_bytes())
}

/// Reconstruct a full ed25519 key pair from a private key.
pub fn keypair_from_private(private: PrivateKey) -> KeyPair {
    let public = public_from_private(&private);
    KeyPair { public, private }
}

/// Derive the compressed secp256k1 public key from a private scalar.
///
/// Fails for the zero scalar or a scalar not below the curve order.
pub fn secp256k1_public_from_private(
    private: &PrivateKey,
) -> Result<Secp256k1PublicKey, SignatureError> {
    let signing_key = k256::ecdsa::SigningKey::from_slice(&private.0)
        .map_err(|e| SignatureError::KeyDerivation(e.to_string()))?;
    let point = signing_key.verifying_key().to_encoded_point(true);
    Secp256k1PublicKey::from_slice(point.as_bytes())
        .ok_or_else(|| SignatureError::KeyDerivation("non-compressed public key".into()))
}
