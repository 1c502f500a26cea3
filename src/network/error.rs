//! Network error types

use thiserror::Error;

use crate::crypto::CryptoError;
use crate::message::MessageType;
use crate::person::{KeyKind, PersonId};
use crate::transform::TransformError;

/// Caller-supplied input that the network refuses
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No person with this id is registered
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),

    /// Compression ratio outside (0, 1]
    #[error("Invalid compression ratio {0}: must be in (0, 1]")]
    InvalidRatio(f64),

    /// Sender cannot reach receiver (only checked when `require_route` is set)
    #[error("No route from {from} to {to}")]
    NoRoute {
        /// Sender id
        from: PersonId,
        /// Receiver id
        to: PersonId,
    },
}

/// Errors returned by [`Network`](super::Network) operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Unknown participant, bad ratio, or missing route
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A receive operation was handed a message with another tag
    #[error("Wrong message type: expected {expected}, got {actual}")]
    WrongMessageType {
        /// Tag the operation handles
        expected: MessageType,
        /// Tag the message carries
        actual: MessageType,
    },

    /// A participant lacks the key an operation needs
    #[error("{person} has no {key} key")]
    MissingKey {
        /// Who is missing the key
        person: PersonId,
        /// Which half is missing
        key: KeyKind,
    },

    /// Ciphertext was rejected by the receiver's private key
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Decrypted bytes are not UTF-8 text
    #[error("Decrypted payload is not valid UTF-8")]
    InvalidPlaintext,

    /// The body has the wrong representation for this operation
    #[error("Expected a {expected} body")]
    InvalidBody {
        /// `"text"` or `"binary"`
        expected: &'static str,
    },

    /// The signed message did not verify
    #[error("Signature verification failed")]
    SignatureRejected,

    /// Transform failure other than a bad ratio
    #[error(transparent)]
    Transform(TransformError),

    /// Crypto failure other than a rejected ciphertext
    #[error(transparent)]
    Crypto(CryptoError),
}

impl NetworkError {
    /// True for [`NetworkError::Validation`]
    pub fn is_validation(&self) -> bool {
        matches!(self, NetworkError::Validation(_))
    }
}

impl From<TransformError> for NetworkError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::InvalidRatio(ratio) => {
                NetworkError::Validation(ValidationError::InvalidRatio(ratio))
            }
            other => NetworkError::Transform(other),
        }
    }
}

impl From<CryptoError> for NetworkError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::DecryptionFailed => NetworkError::DecryptionFailed,
            other => NetworkError::Crypto(other),
        }
    }
}

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_ratio_becomes_validation_error() {
        let err = NetworkError::from(TransformError::InvalidRatio(1.5));
        assert!(err.is_validation());
        assert_eq!(err, NetworkError::Validation(ValidationError::InvalidRatio(1.5)));
    }

    #[test]
    fn test_decryption_failure_is_distinct() {
        let err = NetworkError::from(CryptoError::DecryptionFailed);
        assert_eq!(err, NetworkError::DecryptionFailed);

        let err = NetworkError::from(CryptoError::InvalidPublicKey);
        assert_eq!(err, NetworkError::Crypto(CryptoError::InvalidPublicKey));
    }

    #[test]
    fn test_display() {
        let err = NetworkError::MissingKey {
            person: PersonId::from("alice"),
            key: KeyKind::Private,
        };
        assert_eq!(err.to_string(), "alice has no private key");

        let err = NetworkError::WrongMessageType {
            expected: MessageType::RleCompressed,
            actual: MessageType::Plain,
        };
        assert_eq!(
            err.to_string(),
            "Wrong message type: expected rle_compressed, got plain"
        );
    }
}
