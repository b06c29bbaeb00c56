//! BIP39-style recovery phrase generation, fixed to 256-bit entropy.
//!
//! 32 bytes of entropy are hashed with SHA-256; the first 8 bits of the
//! digest become the checksum. The 264 concatenated bits split into 24
//! groups of 11, each an index into the fixed 2048-word English
//! dictionary.
//!
//! The bit packing is implemented here rather than delegated to the
//! `bip39` crate because the generation contract has an explicit failure
//! path (`RecoveryPhraseGenerationFailed` when chunking yields no chunks)
//! that `Mnemonic::from_entropy` does not surface. The crate still
//! supplies the dictionary.

use bip39::Language;
use nite_types::RecoveryPhrase;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// Entropy drawn for a fresh phrase: 256 bits.
const ENTROPY_BYTES: usize = 32;
/// Bits per dictionary index.
const BITS_PER_WORD: usize = 11;

/// The fixed 2048-word dictionary, immutable for the process lifetime.
pub fn dictionary() -> &'static [&'static str; 2048] {
    Language::English.word_list()
}

/// True if `word` is a member of the dictionary.
pub fn is_dictionary_word(word: &str) -> bool {
    dictionary().binary_search(&word).is_ok()
}

/// Generate a fresh 24-word recovery phrase from secure random entropy.
pub fn generate_recovery_phrase() -> Result<RecoveryPhrase, CryptoError> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let words = words_from_entropy(&entropy)?;
    Ok(RecoveryPhrase::new(words))
}

/// Map entropy bytes to dictionary words.
///
/// Checksum length is `entropy_bits / 32`, per BIP39. Fails with
/// [`CryptoError::RecoveryPhraseGenerationFailed`] iff bit-chunking yields
/// no chunks — unreachable for the fixed 32-byte entropy, but the failure
/// path is part of the contract.
pub fn words_from_entropy(entropy: &[u8]) -> Result<Vec<String>, CryptoError> {
    let entropy_bits = entropy.len() * 8;
    let checksum_bits = entropy_bits / 32;
    let word_count = (entropy_bits + checksum_bits) / BITS_PER_WORD;
    if word_count == 0 {
        return Err(CryptoError::RecoveryPhraseGenerationFailed);
    }

    let checksum = Sha256::digest(entropy);
    let mut data = entropy.to_vec();
    data.extend_from_slice(&checksum[..checksum_bits.div_ceil(8)]);

    let words = (0..word_count)
        .map(|i| {
            let idx = index_at(&data, i * BITS_PER_WORD);
            dictionary()[idx as usize].to_string()
        })
        .collect();
    Ok(words)
}

/// Verify a transcribed phrase: dictionary membership plus checksum match
/// after repacking the words into their bit string.
///
/// Takes a plain word slice rather than a [`RecoveryPhrase`] so that
/// user-transcribed input of any length can be checked without panicking;
/// anything other than 24 words is simply invalid.
pub fn validate_phrase(words: &[String]) -> bool {
    if words.len() != 24 {
        return false;
    }

    let mut data = [0u8; 33];
    for (i, word) in words.iter().enumerate() {
        let Ok(idx) = dictionary().binary_search(&word.as_str()) else {
            return false;
        };
        for k in 0..BITS_PER_WORD {
            if (idx >> (BITS_PER_WORD - 1 - k)) & 1 == 1 {
                let bit = i * BITS_PER_WORD + k;
                data[bit / 8] |= 1 << (7 - (bit % 8));
            }
        }
    }

    let (entropy, checksum) = data.split_at(ENTROPY_BYTES);
    Sha256::digest(entropy)[0] == checksum[0]
}

/// Read the 11-bit big-endian index starting at `bit_offset`.
fn index_at(data: &[u8], bit_offset: usize) -> u16 {
    let mut idx = 0u16;
    for bit in bit_offset..bit_offset + BITS_PER_WORD {
        let set = (data[bit / 8] >> (7 - (bit % 8))) & 1;
        idx = (idx << 1) | set as u16;
    }
    idx
}
