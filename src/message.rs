//! Message envelope and transform metadata
//!
//! [`MessageMetadata`] is a closed set of variants, one per transform tag,
//! so a field only exists on the variant that produced it.

use serde::{Deserialize, Serialize};

use crate::crypto::{Digest, Signature};
use crate::person::PersonId;

/// Transform tag carried by every message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// No transform
    Plain,
    /// Run-length encoded body
    RleCompressed,
    /// Spectrally truncated body
    FftCompressed,
    /// RSA-OAEP ciphertext body
    Encrypted,
    /// Plain body with an RSA-PSS signature
    Signed,
    /// Acknowledgement of a verified signed message
    SignConfirmation,
}

impl MessageType {
    /// Lowercase tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Plain => "plain",
            MessageType::RleCompressed => "rle_compressed",
            MessageType::FftCompressed => "fft_compressed",
            MessageType::Encrypted => "encrypted",
            MessageType::Signed => "signed",
            MessageType::SignConfirmation => "sign_confirmation",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transform-specific side data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "snake_case")]
pub enum MessageMetadata {
    /// No transform
    Plain,
    /// Run-length encoded
    RleCompressed {
        /// Body length in characters before encoding
        original_length: usize,
    },
    /// Spectrally truncated; informational only, there is no way back
    FftCompressed {
        /// Body length in characters before compression
        original_length: usize,
        /// Fraction of frequency components kept, in (0, 1]
        compression_ratio: f64,
    },
    /// Encrypted to the receiver
    Encrypted {
        /// Plaintext length in characters
        original_length: usize,
    },
    /// Signed by the sender
    Signed {
        /// Signature over `original_hash`
        signature: Signature,
        /// SHA-256 of the body at signing time
        original_hash: Digest,
    },
    /// Receiver confirms a signed message checked out
    SignConfirmation {
        /// Digest of the confirmed message body
        original_hash: Digest,
    },
}

impl MessageMetadata {
    /// The tag of this variant
    pub fn message_type(&self) -> MessageType {
        match self {
            MessageMetadata::Plain => MessageType::Plain,
            MessageMetadata::RleCompressed { .. } => MessageType::RleCompressed,
            MessageMetadata::FftCompressed { .. } => MessageType::FftCompressed,
            MessageMetadata::Encrypted { .. } => MessageType::Encrypted,
            MessageMetadata::Signed { .. } => MessageType::Signed,
            MessageMetadata::SignConfirmation { .. } => MessageType::SignConfirmation,
        }
    }

    /// Length of the untransformed body, where the variant records one
    pub fn original_length(&self) -> Option<usize> {
        match self {
            MessageMetadata::RleCompressed { original_length }
            | MessageMetadata::FftCompressed { original_length, .. }
            | MessageMetadata::Encrypted { original_length } => Some(*original_length),
            _ => None,
        }
    }
}

/// Message payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum MessageBody {
    /// Text payload
    Text(String),
    /// Binary payload (hex in serialized form)
    Binary(#[serde(with = "hex_bytes")] Vec<u8>),
}

impl MessageBody {
    /// Text content, if this is a text body
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageBody::Text(text) => Some(text),
            MessageBody::Binary(_) => None,
        }
    }

    /// Raw bytes of the body (UTF-8 for text)
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MessageBody::Text(text) => text.as_bytes(),
            MessageBody::Binary(bytes) => bytes,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True if the body is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for MessageBody {
    fn from(text: String) -> Self {
        MessageBody::Text(text)
    }
}

impl From<&str> for MessageBody {
    fn from(text: &str) -> Self {
        MessageBody::Text(text.to_string())
    }
}

impl From<Vec<u8>> for MessageBody {
    fn from(bytes: Vec<u8>) -> Self {
        MessageBody::Binary(bytes)
    }
}

/// An envelope between two registered people
///
/// Sender and receiver are ids into the network registry, never owned
/// copies of the people themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent it
    pub sender: PersonId,
    /// Who it is for
    pub receiver: PersonId,
    /// Transform tag and side data
    pub metadata: MessageMetadata,
    /// Payload
    pub body: MessageBody,
}

impl Message {
    /// Assemble a message
    pub fn new(
        sender: PersonId,
        receiver: PersonId,
        metadata: MessageMetadata,
        body: impl Into<MessageBody>,
    ) -> Self {
        Message {
            sender,
            receiver,
            metadata,
            body: body.into(),
        }
    }

    /// Shortcut for `self.metadata.message_type()`
    pub fn message_type(&self) -> MessageType {
        self.metadata.message_type()
    }

    /// Export as JSON for auditing
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON produced by [`Message::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
