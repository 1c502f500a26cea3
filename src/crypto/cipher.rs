//! RSA-OAEP Encryption
//!
//! Asymmetric encryption with OAEP padding (MGF1 over SHA-256, SHA-256
//! label hash, empty label).

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::Oaep;
use sha2::Sha256;

use super::error::{CryptoError, CryptoResult};
use super::keypair::{parse_private_key, parse_public_key};

/// Bytes of OAEP overhead for a SHA-256 based padding
pub const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Asymmetric cipher for encryption/decryption
pub struct Cipher;

impl Cipher {
    /// Largest plaintext that fits under a given public key
    pub fn max_plaintext_len(public_key: &[u8]) -> CryptoResult<usize> {
        let key = parse_public_key(public_key)?;
        Ok(key.size().saturating_sub(OAEP_OVERHEAD))
    }

    /// Encrypt data for the holder of `public_key`
    ///
    /// Output length equals the modulus size. Plaintexts longer than
    /// [`Cipher::max_plaintext_len`] are rejected.
    pub fn encrypt(public_key: &[u8], plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        let key = parse_public_key(public_key)?;

        let limit = key.size().saturating_sub(OAEP_OVERHEAD);
        if plaintext.len() > limit {
            return Err(CryptoError::EncryptionFailed(format!(
                "plaintext is {} bytes, key allows at most {}",
                plaintext.len(),
                limit
            )));
        }

        key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))
    }

    /// Decrypt data with `private_key`
    pub fn decrypt(private_key: &[u8], ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        let key = parse_private_key(private_key)?;

        if ciphertext.len() != key.size() {
            return Err(CryptoError::DecryptionFailed);
        }

        key.decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}
