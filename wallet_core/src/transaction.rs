//! Transaction serialization and signing.

use nite_crypto::{is_valid_private_key, sign_message};
use nite_types::{SignedTransaction, Transaction, HEX_PREFIX};

use crate::error::WalletError;

/// Sign a transaction with a hex-encoded private key.
///
/// The transaction is serialized to canonical JSON (fixed camelCase field
/// order — see [`nite_types::Transaction`]); the signature is computed
/// over those bytes, never over the in-memory struct. Both output fields
/// are `0x`-prefixed hex: `hash` the 64-byte signature, `raw` the
/// serialized transaction, which a third party can re-hash to verify the
/// signature.
pub fn sign_transaction(
    transaction: &Transaction,
    private_key: &str,
) -> Result<SignedTransaction, WalletError> {
    if !is_valid_private_key(private_key) {
        return Err(WalletError::InvalidPrivateKey);
    }
    validate_decimal_fields(transaction)?;

    // serde_json over a struct is deterministic: field order is fixed by
    // declaration order.
    let raw = serde_json::to_vec(transaction).map_err(|_| WalletError::InvalidInput)?;
    let signature = sign_message(&raw, private_key)?;
    tracing::debug!(raw_len = raw.len(), "signed transaction");

    Ok(SignedTransaction {
        hash: signature.to_hex(),
        raw: format!("{}{}", HEX_PREFIX, hex::encode(&raw)),
    })
}

/// The string-typed numeric fields must be non-empty ASCII decimal.
fn validate_decimal_fields(transaction: &Transaction) -> Result<(), WalletError> {
    for field in [
        &transaction.gas_price,
        &transaction.gas,
        &transaction.value,
    ] {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::InvalidInput);
        }
    }
    Ok(())
}
