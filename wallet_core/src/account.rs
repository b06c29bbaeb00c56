//! Account creation, import, and message signing.

use nite_crypto::{
    derive_address, generate_keypair, generate_recovery_phrase, keypair_from_private_hex,
    sign_message, to_hex,
};
use nite_types::{Account, ACTIVE_ADDRESS_SCHEME};

use crate::error::WalletError;

/// Create a new account: fresh recovery phrase, fresh key pair, address
/// under the active scheme.
///
/// Fails fast with [`WalletError::RecoveryPhraseGenerationFailed`] if the
/// phrase cannot be generated; no key material is produced in that case.
pub fn create_account() -> Result<Account, WalletError> {
    let recovery_phrase = generate_recovery_phrase()?;

    let keypair = generate_keypair();
    let address = derive_address(&keypair.public, ACTIVE_ADDRESS_SCHEME);
    tracing::debug!(address = %address, "created account");

    Ok(Account {
        address,
        public_key: keypair.public,
        private_key: keypair.private,
        recovery_phrase,
    })
}

/// Import an account from a hex-encoded private key (optional `0x`/`0X`
/// prefix).
///
/// The recovery phrase attached to the returned account is freshly
/// generated and unrelated to the imported key — it cannot recover it.
/// This mirrors the create path's API shape and nothing more; treat the
/// phrase as decorative metadata. Phrase generation is checked before the
/// key is validated.
pub fn account_from_private_key(private_key: &str) -> Result<Account, WalletError> {
    let recovery_phrase = generate_recovery_phrase()?;

    let keypair = keypair_from_private_hex(private_key)?;
    let address = derive_address(&keypair.public, ACTIVE_ADDRESS_SCHEME);
    tracing::debug!(address = %address, "imported account");

    Ok(Account {
        address,
        public_key: keypair.public,
        private_key: keypair.private,
        recovery_phrase,
    })
}

/// Sign a textual message with a hex-encoded private key.
///
/// The message is encoded through the codepoint hex encoder
/// ([`nite_crypto::to_hex`]) and that encoding is the signing pre-image.
/// Returns the `0x`-prefixed signature hex. Deterministic: same message
/// and key always produce the same output.
pub fn sign_data(data: &str, private_key: &str) -> Result<String, WalletError> {
    let encoded = to_hex(data);
    let signature = sign_message(encoded.as_bytes(), private_key)?;
    tracing::debug!(message_len = data.len(), "signed message");
    Ok(signature.to_hex())
}
