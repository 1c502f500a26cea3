//! RSA key pair generation
//!
//! Keys leave this module as PEM-encoded byte blobs (PKCS#8 for the
//! private half, SubjectPublicKeyInfo for the public half). Callers treat
//! them as opaque; only the cipher and signing modules parse them back.

use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use zeroize::{Zeroizing, ZeroizeOnDrop};

use super::error::{CryptoError, CryptoResult};

/// Default modulus size in bits
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Smallest modulus accepted by [`KeyPair::generate_with_bits`]
pub const MIN_KEY_BITS: usize = 1024;

/// Public exponent used for every generated key
pub const PUBLIC_EXPONENT: u64 = 65537;

/// A freshly generated public/private key pair
///
/// The private key bytes are zeroized when dropped.
#[derive(ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public_key: Vec<u8>,
    private_key: Vec<u8>,
}

impl KeyPair {
    /// Generate a new 2048-bit key pair
    pub fn generate() -> CryptoResult<Self> {
        Self::generate_with_bits(DEFAULT_KEY_BITS)
    }

    /// Generate a key pair with a specific modulus size
    pub fn generate_with_bits(bits: usize) -> CryptoResult<Self> {
        if bits < MIN_KEY_BITS {
            return Err(CryptoError::KeyGenerationFailed(format!(
                "modulus of {} bits is below the {} bit minimum",
                bits, MIN_KEY_BITS
            )));
        }

        let exponent = BigUint::from(PUBLIC_EXPONENT);
        let private = RsaPrivateKey::new_with_exp(&mut OsRng, bits, &exponent)
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        let public = RsaPublicKey::from(&private);

        let private_pem = private
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        let public_pem = public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;

        Ok(KeyPair {
            public_key: public_pem.into_bytes(),
            private_key: private_pem.as_bytes().to_vec(),
        })
    }

    /// Get the public key blob
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Get the private key blob
    ///
    /// # Security Warning
    /// The returned bytes are the full private key. Never log them.
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// Split into `(public, private)` blobs
    pub fn into_parts(self) -> (Vec<u8>, Zeroizing<Vec<u8>>) {
        (self.public_key.clone(), Zeroizing::new(self.private_key.clone()))
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        KeyPair {
            public_key: self.public_key.clone(),
            private_key: self.private_key.clone(),
        }
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key_len", &self.public_key.len())
            .finish_non_exhaustive()
    }
}

pub(crate) fn parse_public_key(bytes: &[u8]) -> CryptoResult<RsaPublicKey> {
    let pem = std::str::from_utf8(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
    RsaPublicKey::from_public_key_pem(pem).map_err(|_| CryptoError::InvalidPublicKey)
}

pub(crate) fn parse_private_key(bytes: &[u8]) -> CryptoResult<RsaPrivateKey> {
    let pem = std::str::from_utf8(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
    RsaPrivateKey::from_pkcs8_pem(pem).map_err(|_| CryptoError::InvalidPrivateKey)
}
