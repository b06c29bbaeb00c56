//! Cryptographic operations for the Adamnite wallet SDK.
//!
//! - **secp256k1 ECDSA** with RFC 6979 deterministic nonces for signing
//! - **BIP39-style** 24-word recovery phrase generation
//! - Address derivation (Base58/RIPEMD-160 or raw public key hex)
//! - Hex validation of caller-supplied key material
//!
//! Every function here is stateless: keys are passed in per call and never
//! retained, so the whole crate is safe to use concurrently without
//! synchronization. The only non-determinism is the `OsRng` draw in the
//! generation paths.

pub mod address;
pub mod error;
pub mod hex;
pub mod keys;
pub mod mnemonic;
pub mod sign;

pub use address::{derive_address, is_valid_address};
pub use error::CryptoError;
pub use self::hex::{is_hex, is_valid_private_key, is_valid_public_key, strip_hex_prefix, to_hex};
pub use keys::{generate_keypair, keypair_from_private_hex, public_from_private};
pub use mnemonic::{
    dictionary, generate_recovery_phrase, is_dictionary_word, validate_phrase, words_from_entropy,
};
pub use sign::{sign_message, verify_signature};
