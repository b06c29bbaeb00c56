//! Account record and recovery phrase.

use std::fmt;

use crate::address::Address;
use crate::keys::{PrivateKey, PublicKey};

/// Number of words in every recovery phrase (256 entropy bits + 8
/// checksum bits, 11 bits per word).
pub const RECOVERY_PHRASE_WORDS: usize = 24;

/// An ordered 24-word recovery phrase drawn from the fixed 2048-word
/// dictionary. Word order is significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryPhrase(Vec<String>);

impl RecoveryPhrase {
    /// Wrap an ordered word list.
    ///
    /// # Panics
    /// Panics if the list is not exactly 24 words; generation in
    /// `nite-crypto` is the only intended producer.
    pub fn new(words: Vec<String>) -> Self {
        assert_eq!(
            words.len(),
            RECOVERY_PHRASE_WORDS,
            "recovery phrase must be {RECOVERY_PHRASE_WORDS} words"
        );
        Self(words)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// A wallet account: address, key material, and recovery phrase.
///
/// Created atomically by `nite_wallet_core::create_account` or
/// `account_from_private_key`; immutable afterwards. The caller owns
/// storage and destruction — nothing here persists anything.
///
/// The struct is deliberately not serde-serializable: it contains the
/// private key. Export individual fields instead.
pub struct Account {
    pub address: Address,
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
    pub recovery_phrase: RecoveryPhrase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn phrase_holds_24_words_in_order() {
        let phrase = RecoveryPhrase::new(words(24));
        assert_eq!(phrase.word_count(), 24);
        assert_eq!(phrase.words()[0], "word0");
        assert_eq!(phrase.words()[23], "word23");
    }

    #[test]
    #[should_panic]
    fn short_phrase_rejected() {
        RecoveryPhrase::new(words(12));
    }

    #[test]
    fn display_is_space_joined() {
        let phrase = RecoveryPhrase::new(words(24));
        let rendered = phrase.to_string();
        assert!(rendered.starts_with("word0 word1"));
        assert_eq!(rendered.split(' ').count(), 24);
    }
}
