//! SHA-256 hashing
//!
//! Message digests used by the signature transform.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use super::error::{CryptoError, CryptoResult};

/// Size of a digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// A SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_SIZE]);

impl Digest {
    /// Digest arbitrary bytes
    pub fn of(data: &[u8]) -> Self {
        Digest(Sha256::digest(data).into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != DIGEST_SIZE {
            return Err(CryptoError::InvalidDigestLength {
                expected: DIGEST_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; DIGEST_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Digest(arr))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string
    pub fn from_hex(s: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(s).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Check that `data` hashes to this digest
    pub fn matches(&self, data: &[u8]) -> bool {
        constant_time_eq(&Self::of(data).0, &self.0)
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({}...)", &self.to_hex()[..16])
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let data = b"Hello, Bob!";
        assert_eq!(Digest::of(data), Digest::of(data));
    }

    #[test]
    fn test_digest_different_inputs() {
        assert_ne!(Digest::of(b"input1"), Digest::of(b"input2"));
    }

    #[test]
    fn test_known_vector() {
        // SHA-256("abc")
        let digest = Digest::of(b"abc");
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_matches() {
        let digest = Digest::of(b"test data");

        assert!(digest.matches(b"test data"));
        assert!(!digest.matches(b"wrong data"));
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        let err = Digest::from_bytes(&[0u8; 31]).unwrap_err();
        assert_eq!(
            err,
            CryptoError::InvalidDigestLength {
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = Digest::of(b"roundtrip");
        let restored = Digest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, restored);
    }

    #[test]
    fn test_from_hex_errors() {
        assert!(matches!(
            Digest::from_hex("zz"),
            Err(CryptoError::InvalidHex(_))
        ));
        assert_eq!(
            Digest::from_hex("abcd").unwrap_err(),
            CryptoError::InvalidDigestLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8; 32];
        let b = [1u8; 32];
        let c = [2u8; 32];

        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
        assert!(!constant_time_eq(&a, &c[..16]));
    }
}
