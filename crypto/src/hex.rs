//! Hex codec and validators for caller-supplied key material.
//!
//! Validators return `bool` and never error; the fallible operations in
//! [`crate::keys`] and [`crate::sign`] translate a `false` into
//! [`crate::CryptoError::InvalidPrivateKey`] before touching the curve.

/// Hex length of a 32-byte private key.
pub const PRIVATE_KEY_HEX_LENGTH: usize = 64;
/// Hex length of a 65-byte uncompressed public key.
pub const PUBLIC_KEY_HEX_LENGTH: usize = 130;

/// Whole-string hex check: non-empty and every byte an ASCII hex digit.
pub fn is_hex(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Encode text as concatenated hex of each character's code point.
///
/// This is a textual payload encoder for message signing, not a binary
/// codec: code points above U+00FF produce more than two digits and the
/// output only round-trips for single-byte-range text.
pub fn to_hex(value: &str) -> String {
    let mut hex = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        hex.push_str(&format!("{:x}", c as u32));
    }
    hex
}

/// Strip one leading `0x` or `0X` prefix, if present.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// True if `key`, after optional prefix stripping, is exactly 64 hex
/// characters. Returns `false` on any violation, including empty input.
pub fn is_valid_private_key(key: &str) -> bool {
    let key = strip_hex_prefix(key);
    key.len() == PRIVATE_KEY_HEX_LENGTH && is_hex(key)
}

/// True if `key`, after optional prefix stripping, is exactly 130 hex
/// characters (uncompressed SEC1 point).
pub fn is_valid_public_key(key: &str) -> bool {
    let key = strip_hex_prefix(key);
    key.len() == PUBLIC_KEY_HEX_LENGTH && is_hex(key)
}
