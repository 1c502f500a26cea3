//! RSA-PSS signatures
//!
//! Signatures are made over a SHA-256 message digest rather than the
//! message itself. PSS hashes its input once more with SHA-256, and uses
//! MGF1(SHA-256) with a salt as long as the hash output.

use rand::rngs::OsRng;
use rsa::Pss;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use super::error::{CryptoError, CryptoResult};
use super::hash::Digest;
use super::keypair::{parse_private_key, parse_public_key};

/// A signature produced by [`Signer::sign`]
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(pub Vec<u8>);

impl Signature {
    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Create from hex string
    pub fn from_hex(s: &str) -> CryptoResult<Self> {
        hex::decode(s)
            .map(Signature)
            .map_err(|e| CryptoError::InvalidHex(e.to_string()))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex = self.to_hex();
        write!(f, "Signature({}...)", &hex[..hex.len().min(16)])
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Signing and verification operations
pub struct Signer;

impl Signer {
    /// Hash `body` and sign the digest with `private_key`
    ///
    /// Returns the digest alongside the signature so both can travel in
    /// message metadata.
    pub fn sign(body: &[u8], private_key: &[u8]) -> CryptoResult<(Digest, Signature)> {
        let digest = Digest::of(body);
        let signature = Self::sign_digest(&digest, private_key)?;
        Ok((digest, signature))
    }

    /// Sign an already computed digest
    pub fn sign_digest(digest: &Digest, private_key: &[u8]) -> CryptoResult<Signature> {
        let key = parse_private_key(private_key)?;
        let hashed = Sha256::digest(digest.as_bytes());

        key.sign_with_rng(&mut OsRng, Pss::new::<Sha256>(), &hashed)
            .map(Signature)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))
    }

    /// Check `signature` over `digest` against `public_key`
    pub fn verify_digest(
        digest: &Digest,
        signature: &Signature,
        public_key: &[u8],
    ) -> CryptoResult<()> {
        let key = parse_public_key(public_key)?;
        let hashed = Sha256::digest(digest.as_bytes());

        key.verify(Pss::new::<Sha256>(), &hashed, signature.as_bytes())
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_keys;

    #[test]
    fn test_sign_verify() {
        let pair = test_keys::alice();
        let (digest, signature) = Signer::sign(b"Hello, Bob!", pair.private_key()).unwrap();

        assert_eq!(digest, Digest::of(b"Hello, Bob!"));
        assert!(Signer::verify_digest(&digest, &signature, pair.public_key()).is_ok());
    }

    #[test]
    fn test_signatures_are_randomized() {
        let pair = test_keys::alice();
        let (_, sig1) = Signer::sign(b"same", pair.private_key()).unwrap();
        let (_, sig2) = Signer::sign(b"same", pair.private_key()).unwrap();

        // Salted padding
        assert_ne!(sig1, sig2);
        assert_eq!(sig1.as_bytes().len(), 256);
    }

    #[test]
    fn test_wrong_digest_fails() {
        let pair = test_keys::alice();
        let (_, signature) = Signer::sign(b"original", pair.private_key()).unwrap();

        let other = Digest::of(b"tampered");
        assert_eq!(
            Signer::verify_digest(&other, &signature, pair.public_key()).unwrap_err(),
            CryptoError::SignatureVerificationFailed
        );
    }

    #[test]
    fn test_wrong_key_fails() {
        let (digest, signature) = Signer::sign(b"message", test_keys::alice().private_key()).unwrap();

        assert!(Signer::verify_digest(&digest, &signature, test_keys::eve().public_key()).is_err());
    }

    #[test]
    fn test_corrupted_signature_fails() {
        let pair = test_keys::alice();
        let (digest, mut signature) = Signer::sign(b"message", pair.private_key()).unwrap();
        signature.0[0] ^= 0x01;

        assert!(Signer::verify_digest(&digest, &signature, pair.public_key()).is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let (_, signature) = Signer::sign(b"hex", test_keys::alice().private_key()).unwrap();
        let restored = Signature::from_hex(&signature.to_hex()).unwrap();
        assert_eq!(signature, restored);
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        assert!(matches!(
            Signature::from_hex("not hex"),
            Err(CryptoError::InvalidHex(_))
        ));
    }
}
