//! Account address type and address scheme selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an address is derived from a public key.
///
/// The two schemes are mutually incompatible; a deployment picks exactly
/// one via [`ACTIVE_ADDRESS_SCHEME`] so that every address it produces is
/// valid on its target network. `derive_address` in `nite-crypto` still
/// accepts the scheme as a parameter for tooling that needs the other form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressScheme {
    /// Address is the `0x`-prefixed hex of the 65-byte uncompressed
    /// public key (132 characters).
    RawPublicKeyHex,
    /// Address is `base58(ripemd160(sha512(public_key)[16..]))`,
    /// 28 characters.
    Base58Ripemd,
}

/// The address scheme this build derives and validates by default.
pub const ACTIVE_ADDRESS_SCHEME: AddressScheme = AddressScheme::Base58Ripemd;

/// An account address string under one of the [`AddressScheme`]s.
///
/// A one-way function of the public key; see `nite_crypto::derive_address`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap a raw address string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_raw() {
        let addr = Address::new("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy");
        assert_eq!(addr.to_string(), addr.as_str());
    }

    #[test]
    fn serde_is_transparent() {
        let addr = Address::new("abc123");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"abc123\"");
    }
}
