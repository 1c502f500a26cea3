//! Cryptographic primitives for the message transforms
//!
//! This module provides all the cryptographic building blocks:
//! - `keypair`: RSA-2048 key generation, exported as PEM blobs
//! - `cipher`: RSA-OAEP encryption
//! - `signing`: RSA-PSS signatures over SHA-256 digests
//! - `hash`: SHA-256 digests

pub mod cipher;
pub mod error;
pub mod hash;
pub mod keypair;
pub mod signing;

// Re-export commonly used types
pub use cipher::Cipher;
pub use error::{CryptoError, CryptoResult};
pub use hash::{Digest, DIGEST_SIZE};
pub use keypair::{KeyPair, DEFAULT_KEY_BITS};
pub use signing::{Signature, Signer};
