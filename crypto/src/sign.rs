//! Ed25519 and secp256k1 signing.
//!
//! Chains decide what to sign: Tezos hands over a watermarked Blake2b digest,
//! Ripple and Avalanche hand over 32-byte prehashes. Nothing here hashes the
//! message a second time for secp256k1.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature};
use wk_types::{
    PrivateKey, PublicKey, RecoverableSignature, Secp256k1PublicKey, Signature, SignatureError,
};

/// Sign a message with an ed25519 private key.
pub fn sign_ed25519(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify an ed25519 signature. Rejects malformed keys and non-canonical signatures.
pub fn verify_ed25519(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

fn secp256k1_key(private_key: &PrivateKey) -> Result<k256::ecdsa::SigningKey, SignatureError> {
    k256::ecdsa::SigningKey::from_slice(&private_key.0)
        .map_err(|e| SignatureError::KeyDerivation(e.to_string()))
}

/// Recoverable secp256k1 signature `r || s || v` over a 32-byte prehash.
pub fn sign_secp256k1_recoverable(
    digest: &[u8; 32],
    private_key: &PrivateKey,
) -> Result<RecoverableSignature, SignatureError> {
    let key = secp256k1_key(private_key)?;
    let (sig, recid) = key
        .sign_prehash_recoverable(digest)
        .map_err(|e| SignatureError::Primitive(e.to_string()))?;
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = recid.to_byte();
    Ok(RecoverableSignature(out))
}

/// DER-encoded, low-S secp256k1 signature over a 32-byte prehash.
pub fn sign_secp256k1_der(
    digest: &[u8; 32],
    private_key: &PrivateKey,
) -> Result<Vec<u8>, SignatureError> {
    let key = secp256k1_key(private_key)?;
    let sig: EcdsaSignature = key
        .sign_prehash(digest)
        .map_err(|e| SignatureError::Primitive(e.to_string()))?;
    let sig = sig.normalize_s().unwrap_or(sig);
    Ok(sig.to_der().as_bytes().to_vec())
}

/// Verify a DER secp256k1 signature over a 32-byte prehash.
pub fn verify_secp256k1_der(
    digest: &[u8; 32],
    der: &[u8],
    public_key: &Secp256k1PublicKey,
) -> bool {
    let Ok(verifying_key) = k256::ecdsa::VerifyingKey::from_sec1_bytes(public_key.as_bytes())
    else {
        return false;
    };
    let Ok(sig) = EcdsaSignature::from_der(der) else {
        return false;
    };
    verifying_key.verify_prehash(digest, &sig).is_ok()
}

/// Recover the signer's compressed public key from a recoverable signature.
pub fn recover_secp256k1(
    digest: &[u8; 32],
    signature: &RecoverableSignature,
) -> Option<Secp256k1PublicKey> {
    let sig = EcdsaSignature::from_slice(&signature.0[..64]).ok()?;
    let recid = RecoveryId::from_byte(signature.recovery_id())?;
    let key = k256::ecdsa::VerifyingKey::recover_from_prehash(digest, &sig, recid).ok()?;
    Secp256k1PublicKey::from_slice(key.to_encoded_point(true).as_bytes())
}
