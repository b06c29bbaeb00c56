//! secp256k1 key generation and reconstruction.

use k256::ecdsa::SigningKey;
use nite_types::{KeyPair, PrivateKey, PublicKey};
use rand::rngs::OsRng;

use crate::error::CryptoError;
use crate::hex::{is_valid_private_key, strip_hex_prefix};

/// Generate a new secp256k1 key pair from a secure random source.
///
/// Always succeeds: the curve library only yields in-range scalars.
pub fn generate_keypair() -> KeyPair {
    let signing_key = SigningKey::random(&mut OsRng);
    let private = PrivateKey(signing_key.to_bytes().into());
    KeyPair {
        public: encoded_public(&signing_key),
        private,
    }
}

/// Derive the public key from a private key.
///
/// Fails with [`CryptoError::InvalidPrivateKey`] if the bytes are not a
/// valid curve scalar (zero or not below the group order).
pub fn public_from_private(private: &PrivateKey) -> Result<PublicKey, CryptoError> {
    let signing_key =
        SigningKey::from_slice(&private.0).map_err(|_| CryptoError::InvalidPrivateKey)?;
    Ok(encoded_public(&signing_key))
}

/// Reconstruct a full key pair from a hex-encoded private key.
///
/// Accepts an optional `0x`/`0X` prefix. Pure: the same input always
/// yields the same key pair.
pub fn keypair_from_private_hex(private_key: &str) -> Result<KeyPair, CryptoError> {
    let stripped = strip_hex_prefix(private_key);
    if !is_valid_private_key(stripped) {
        return Err(CryptoError::InvalidPrivateKey);
    }
    let bytes: [u8; 32] = hex::decode(stripped)
        .map_err(|_| CryptoError::InvalidPrivateKey)?
        .try_into()
        .map_err(|_| CryptoError::InvalidPrivateKey)?;

    let private = PrivateKey(bytes);
    let public = public_from_private(&private)?;
    Ok(KeyPair { public, private })
}

/// Uncompressed SEC1 encoding (65 bytes) of the signing key's public key.
fn encoded_public(signing_key: &SigningKey) -> PublicKey {
    let point = signing_key.verifying_key().to_encoded_point(false);
    let mut bytes = [0u8; 65];
    bytes.copy_from_slice(point.as_bytes());
    PublicKey(bytes)
}
