//! Participant identities
//!
//! A [`Person`] is an id plus optional key material. Keys are kept as
//! opaque byte blobs here; only the crypto module knows how to parse them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::KeyPair;

/// Unique, immutable identifier of a participant
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create a new id
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        PersonId(s)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Public key as held by a person (PEM text as bytes)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKeyBlob(pub Vec<u8>);

impl PublicKeyBlob {
    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for PublicKeyBlob {
    fn from(bytes: &[u8]) -> Self {
        PublicKeyBlob(bytes.to_vec())
    }
}

impl std::fmt::Debug for PublicKeyBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKeyBlob({} bytes)", self.0.len())
    }
}

/// Private key as held by a person, wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyBlob(Vec<u8>);

impl PrivateKeyBlob {
    /// Get the raw bytes
    ///
    /// # Security Warning
    /// The returned bytes are the full private key. Never log them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for PrivateKeyBlob {
    fn from(bytes: &[u8]) -> Self {
        PrivateKeyBlob(bytes.to_vec())
    }
}

impl std::fmt::Debug for PrivateKeyBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKeyBlob([REDACTED])")
    }
}

/// Which half of a key pair an operation needed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Public key
    Public,
    /// Private key
    Private,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyKind::Public => f.write_str("public"),
            KeyKind::Private => f.write_str("private"),
        }
    }
}

/// A participant in the network
///
/// Encrypting to a person needs their public key; decrypting or signing as
/// a person needs their private key. The private key is zeroized when the
/// person is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    /// Public key, if assigned
    pub public_key: Option<PublicKeyBlob>,
    /// Private key, if assigned
    pub private_key: Option<PrivateKeyBlob>,
}

impl Person {
    /// Create a person without keys
    pub fn new(id: impl Into<PersonId>) -> Self {
        Person {
            id: id.into(),
            public_key: None,
            private_key: None,
        }
    }

    /// Create a person holding both halves of `keys`
    pub fn with_keys(id: impl Into<PersonId>, keys: &KeyPair) -> Self {
        let mut person = Self::new(id);
        person.set_keys(keys);
        person
    }

    /// Assign both halves of `keys`
    pub fn set_keys(&mut self, keys: &KeyPair) {
        self.public_key = Some(PublicKeyBlob::from(keys.public_key()));
        self.private_key = Some(PrivateKeyBlob::from(keys.private_key()));
    }

    /// Get the id
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    /// Get the public key, if present
    pub fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_ref().map(PublicKeyBlob::as_bytes)
    }

    /// Get the private key, if present
    pub fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_ref().map(PrivateKeyBlob::as_bytes)
    }
}

impl std::fmt::Debug for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Person")
            .field("id", &self.id)
            .field("has_public_key", &self.public_key.is_some())
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}
