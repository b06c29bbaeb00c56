use thiserror::Error;

/// Errors produced by the crypto layer.
///
/// All variants are recoverable input-validation failures, carried as pure
/// data so tests can compare them by equality. Validation runs before any
/// curve work, so malformed input never reaches the curve library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid address")]
    InvalidAddress,

    #[error("invalid message")]
    InvalidMessage,

    #[error("recovery phrase generation failed")]
    RecoveryPhraseGenerationFailed,
}
