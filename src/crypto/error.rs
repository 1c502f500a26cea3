//! Cryptographic error types

use thiserror::Error;

/// Errors that can occur in cryptographic operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A digest had the wrong length
    #[error("Invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength {
        /// Expected digest length in bytes
        expected: usize,
        /// Actual digest length in bytes
        actual: usize,
    },

    /// Input was not valid hex
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// The public key blob could not be parsed
    #[error("Invalid public key format")]
    InvalidPublicKey,

    /// The private key blob could not be parsed
    #[error("Invalid private key format")]
    InvalidPrivateKey,

    /// Key pair generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Encryption operation failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed - padding check failed (wrong key or corrupted data)
    #[error("Decryption failed: ciphertext rejected")]
    DecryptionFailed,

    /// Signing operation failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Signature verification failed - the signature is invalid
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}

/// Result type for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
