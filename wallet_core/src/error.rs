use nite_crypto::CryptoError;
use thiserror::Error;

/// Caller-facing errors for wallet operations.
///
/// Every variant is recoverable pure data (no payloads, no stack traces)
/// so tests compare errors by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid address")]
    InvalidAddress,

    #[error("invalid message")]
    InvalidMessage,

    #[error("invalid input")]
    InvalidInput,

    #[error("recovery phrase generation failed")]
    RecoveryPhraseGenerationFailed,
}

impl From<CryptoError> for WalletError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidPrivateKey => WalletError::InvalidPrivateKey,
            CryptoError::InvalidPublicKey => WalletError::InvalidPublicKey,
            CryptoError::InvalidAddress => WalletError::InvalidAddress,
            CryptoError::InvalidMessage => WalletError::InvalidMessage,
            CryptoError::RecoveryPhraseGenerationFailed => {
                WalletError::RecoveryPhraseGenerationFailed
            }
        }
    }
}
