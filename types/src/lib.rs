//! Fundamental types for the Adamnite wallet SDK.
//!
//! This crate defines the value types shared across the workspace: key
//! material, addresses, recovery phrases, accounts, and transactions.
//! Everything here is plain data; the operations that produce these values
//! live in `nite-crypto` and `nite-wallet-core`.

pub mod account;
pub mod address;
pub mod keys;
pub mod transaction;

pub use account::{Account, RecoveryPhrase};
pub use address::{Address, AddressScheme, ACTIVE_ADDRESS_SCHEME};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use transaction::{SignedTransaction, Transaction};

/// Prefix attached to hex-encoded key material and signatures.
pub const HEX_PREFIX: &str = "0x";
