//! Transaction records exchanged with the signing pipeline.

use serde::{Deserialize, Serialize};

/// An unsigned transaction.
///
/// Numeric fields (`gas_price`, `gas`, `value`) are decimal strings, not
/// native integers, so values beyond 2^64 survive untruncated. `value` is
/// denominated in micalli.
///
/// Serialization order is fixed (declaration order, camelCase keys) and is
/// the signing pre-image; changing it would invalidate every existing
/// signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sender address.
    pub from: String,
    /// Receiver address.
    pub to: String,
    /// Gas price, decimal string.
    pub gas_price: String,
    /// Gas limit, decimal string.
    pub gas: String,
    /// Transferred value in micalli, decimal string.
    pub value: String,
    /// Arbitrary payload.
    pub data: String,
}

/// The result of signing a [`Transaction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    /// `0x`-prefixed hex of the signature over the serialized transaction.
    pub hash: String,
    /// `0x`-prefixed hex of the serialized transaction bytes.
    pub raw: String,
}
