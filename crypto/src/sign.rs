//! Deterministic ECDSA signing and verification.
//!
//! Signatures are secp256k1 ECDSA over SHA-256(payload) with an RFC 6979
//! deterministic nonce, encoded as raw 64-byte `r || s` with `s`
//! normalized to its low form. The encoding is stable: identical
//! `(payload, private_key)` pairs always produce byte-identical output,
//! which callers rely on for golden-value comparisons.

use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{SigningKey, VerifyingKey};
use nite_types::{PublicKey, Signature};

use crate::error::CryptoError;
use crate::hex::{is_valid_private_key, strip_hex_prefix};

/// Sign an opaque payload with a hex-encoded private key.
///
/// Validation is eager: the key is checked before any curve work, so
/// malformed input never reaches the curve library. An empty payload
/// fails with [`CryptoError::InvalidMessage`]. The key is used for this
/// one call and not retained.
pub fn sign_message(payload: &[u8], private_key: &str) -> Result<Signature, CryptoError> {
    if payload.is_empty() {
        return Err(CryptoError::InvalidMessage);
    }
    let stripped = strip_hex_prefix(private_key);
    if !is_valid_private_key(stripped) {
        return Err(CryptoError::InvalidPrivateKey);
    }
    let bytes = hex::decode(stripped).map_err(|_| CryptoError::InvalidPrivateKey)?;
    let signing_key = SigningKey::from_slice(&bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;

    let sig: k256::ecdsa::Signature = signing_key.sign(payload);
    let sig = sig.normalize_s().unwrap_or(sig);

    let mut out = [0u8; 64];
    out.copy_from_slice(&sig.to_bytes());
    Ok(Signature(out))
}

/// Verify a signature against a payload and an uncompressed public key.
///
/// Returns `false` for malformed keys or signatures rather than erroring.
pub fn verify_signature(payload: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_key.as_bytes()) else {
        return false;
    };
    let Ok(sig) = k256::ecdsa::Signature::from_slice(signature.as_bytes()) else {
        return false;
    };
    verifying_key.verify(payload, &sig).is_ok()
}
