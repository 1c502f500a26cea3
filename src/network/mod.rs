//! Network façade
//!
//! [`Network`] owns the person registry and the contact graph, and exposes
//! one `send_*` / `receive_*` pair per transform. Sending resolves both
//! participants, runs the forward transform and wraps the result in a
//! [`Message`]. Receiving checks the metadata tag before touching any
//! tag-specific field, then runs the inverse.
//!
//! A `Network` is not internally synchronized. Share it across threads
//! behind a lock (one `RwLock<Network>` per network).

pub mod config;
pub mod error;

pub use config::{ConfigError, NetworkConfig};
pub use error::{NetworkError, NetworkResult, ValidationError};

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::crypto::{Cipher, Digest, KeyPair, Signer};
use crate::graph::ContactGraph;
use crate::message::{Message, MessageBody, MessageMetadata, MessageType};
use crate::person::{KeyKind, Person, PersonId};
use crate::transform::{LosslessCodec, LossyCodec, RunLength, SpectralCompressor};

/// Registry of people plus the graph of who knows whom
#[derive(Debug, Default)]
pub struct Network {
    people: HashMap<PersonId, Person>,
    graph: ContactGraph,
    config: NetworkConfig,
}

impl Network {
    /// Create an empty network with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with explicit configuration
    pub fn with_config(config: NetworkConfig) -> Self {
        Network {
            people: HashMap::new(),
            graph: ContactGraph::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Registry and graph
    // ---------------------------------------------------------------------

    /// Register a person, replacing any existing entry with the same id
    ///
    /// Returns the replaced entry. Existing connections are kept.
    pub fn add_person(&mut self, person: Person) -> Option<Person> {
        let id = person.id().clone();
        info!(person = %id, "registering person");
        self.graph.add_node(id.clone());
        self.people.insert(id, person)
    }

    /// Connect two registered people
    ///
    /// If either id is unknown the call does nothing, unless
    /// `strict_connections` is set, in which case it fails.
    pub fn add_connection(&mut self, a: &str, b: &str) -> NetworkResult<()> {
        let (a, b) = (PersonId::from(a), PersonId::from(b));

        if self.graph.add_edge(&a, &b) {
            debug!(%a, %b, "connection added");
            return Ok(());
        }

        let missing = if self.graph.contains(&a) { b } else { a };
        if self.config.strict_connections {
            return Err(ValidationError::UnknownPerson(missing).into());
        }
        warn!(person = %missing, "ignoring connection to unregistered person");
        Ok(())
    }

    /// Look up a person
    pub fn get_person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// True if `id` is registered
    pub fn contains(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    /// Number of registered people
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// True if nobody is registered
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All registered people, in no particular order
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// The contact graph
    pub fn graph(&self) -> &ContactGraph {
        &self.graph
    }

    /// True if a path of connections joins `a` and `b`
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        self.graph.are_connected(&PersonId::from(a), &PersonId::from(b))
    }

    /// Fewest-hop path from `a` to `b`, or empty if there is none
    pub fn get_path(&self, a: &str, b: &str) -> Vec<PersonId> {
        self.graph.shortest_path(&PersonId::from(a), &PersonId::from(b))
    }

    /// Generate a fresh key pair sized by `key_bits`
    ///
    /// The pair is not attached to anyone; assign it with [`Person::set_keys`].
    pub fn generate_key_pair(&self) -> NetworkResult<KeyPair> {
        Ok(KeyPair::generate_with_bits(self.config.key_bits)?)
    }

    // ---------------------------------------------------------------------
    // Plain
    // ---------------------------------------------------------------------

    /// Send a body without any transform
    pub fn send_plain(&self, sender: &str, receiver: &str, body: &str) -> NetworkResult<Message> {
        let (from, to) = self.participants(sender, receiver)?;
        Ok(Message::new(from.id().clone(), to.id().clone(), MessageMetadata::Plain, body))
    }

    /// Read a plain message
    pub fn receive_plain(&self, message: &Message) -> NetworkResult<String> {
        expect_type(message, MessageType::Plain)?;
        Ok(text_body(message)?.to_string())
    }

    // ---------------------------------------------------------------------
    // Run-length
    // ---------------------------------------------------------------------

    /// Send a run-length encoded body
    pub fn send_rle(&self, sender: &str, receiver: &str, body: &str) -> NetworkResult<Message> {
        let (from, to) = self.participants(sender, receiver)?;

        let encoded = RunLength::encode(body);
        debug!(
            from = %from.id(),
            to = %to.id(),
            original = body.chars().count(),
            encoded = encoded.chars().count(),
            "rle encoded"
        );

        let metadata = MessageMetadata::RleCompressed {
            original_length: body.chars().count(),
        };
        Ok(Message::new(from.id().clone(), to.id().clone(), metadata, encoded))
    }

    /// Decode a run-length encoded message
    pub fn receive_rle(&self, message: &Message) -> NetworkResult<String> {
        expect_type(message, RunLength::MESSAGE_TYPE)?;
        Ok(RunLength::decode(text_body(message)?)?)
    }

    // ---------------------------------------------------------------------
    // Spectral
    // ---------------------------------------------------------------------

    /// Send a spectrally compressed body
    ///
    /// Lossy and one-way: the compressed text is what the receiver gets,
    /// and there is no matching receive operation.
    pub fn send_fft(
        &self,
        sender: &str,
        receiver: &str,
        body: &str,
        compression_ratio: f64,
    ) -> NetworkResult<Message> {
        let (from, to) = self.participants(sender, receiver)?;
        let compressor = SpectralCompressor::new(compression_ratio)?;

        let compressed = compressor.degrade(body);
        debug!(
            from = %from.id(),
            to = %to.id(),
            ratio = compression_ratio,
            cutoff = compressor.cutoff(body.chars().count()),
            "spectral compressed"
        );

        let metadata = MessageMetadata::FftCompressed {
            original_length: body.chars().count(),
            compression_ratio,
        };
        Ok(Message::new(from.id().clone(), to.id().clone(), metadata, compressed))
    }

    // ---------------------------------------------------------------------
    // Encryption
    // ---------------------------------------------------------------------

    /// Encrypt a body to the receiver's public key
    ///
    /// The sender must hold a private key even though encryption does not
    /// use it; it marks the sender as a keyed identity.
    pub fn send_encrypted(
        &self,
        sender: &str,
        receiver: &str,
        body: &str,
    ) -> NetworkResult<Message> {
        let (from, to) = self.participants(sender, receiver)?;

        let public_key = require_key(to, KeyKind::Public)?;
        require_key(from, KeyKind::Private)?;

        let ciphertext = Cipher::encrypt(public_key, body.as_bytes())?;
        debug!(from = %from.id(), to = %to.id(), bytes = ciphertext.len(), "encrypted");

        let metadata = MessageMetadata::Encrypted {
            original_length: body.chars().count(),
        };
        Ok(Message::new(
            from.id().clone(),
            to.id().clone(),
            metadata,
            MessageBody::Binary(ciphertext),
        ))
    }

    /// Decrypt a message with its receiver's private key
    pub fn receive_encrypted(&self, message: &Message) -> NetworkResult<String> {
        expect_type(message, MessageType::Encrypted)?;

        let receiver = self.person(&message.receiver)?;
        let private_key = require_key(receiver, KeyKind::Private)?;

        let ciphertext = match &message.body {
            MessageBody::Binary(bytes) => bytes,
            MessageBody::Text(_) => return Err(NetworkError::InvalidBody { expected: "binary" }),
        };

        let plaintext = Cipher::decrypt(private_key, ciphertext).map_err(|e| {
            warn!(receiver = %message.receiver, "decryption rejected");
            NetworkError::from(e)
        })?;
        String::from_utf8(plaintext).map_err(|_| NetworkError::InvalidPlaintext)
    }

    // ---------------------------------------------------------------------
    // Signatures
    // ---------------------------------------------------------------------

    /// Sign a body with the sender's private key
    ///
    /// The body travels in the clear; the digest and signature ride in
    /// the metadata.
    pub fn send_signed(&self, sender: &str, receiver: &str, body: &str) -> NetworkResult<Message> {
        let (from, to) = self.participants(sender, receiver)?;
        let private_key = require_key(from, KeyKind::Private)?;

        let (original_hash, signature) = Signer::sign(body.as_bytes(), private_key)?;
        debug!(from = %from.id(), to = %to.id(), hash = %original_hash, "signed");

        let metadata = MessageMetadata::Signed {
            signature,
            original_hash,
        };
        Ok(Message::new(from.id().clone(), to.id().clone(), metadata, body))
    }

    /// Check a signed message against its sender's registered public key
    ///
    /// Returns `false` on any failure. The tag is checked first, then the
    /// sender's key, the recorded digest and finally the signature.
    pub fn verify_signed(&self, message: &Message) -> bool {
        if !matches!(message.metadata, MessageMetadata::Signed { .. }) {
            debug!(actual = %message.message_type(), "not a signed message");
            return false;
        }
        let Some(public_key) = self
            .people
            .get(&message.sender)
            .and_then(Person::public_key)
        else {
            warn!(sender = %message.sender, "no public key to verify against");
            return false;
        };
        Self::verify_with_key(message, public_key)
    }

    /// Check a signed message against an explicit public key
    ///
    /// Checks run in order (tag, digest, signature) and stop at the first
    /// failure.
    pub fn verify_with_key(message: &Message, public_key: &[u8]) -> bool {
        let MessageMetadata::Signed {
            signature,
            original_hash,
        } = &message.metadata
        else {
            debug!(actual = %message.message_type(), "not a signed message");
            return false;
        };

        if !original_hash.matches(message.body.as_bytes()) {
            warn!(sender = %message.sender, "body does not match signed digest");
            return false;
        }

        match Signer::verify_digest(original_hash, signature, public_key) {
            Ok(()) => true,
            Err(e) => {
                warn!(sender = %message.sender, error = %e, "signature rejected");
                false
            }
        }
    }

    /// Acknowledge a verified signed message
    ///
    /// Returns a confirmation from the original receiver back to the
    /// original sender, carrying the digest that was confirmed.
    pub fn confirm_signed(&self, message: &Message) -> NetworkResult<Message> {
        let original_hash = signed_digest(message)?;
        if !self.verify_signed(message) {
            return Err(NetworkError::SignatureRejected);
        }

        let (from, to) = self.participants(message.receiver.as_str(), message.sender.as_str())?;
        let metadata = MessageMetadata::SignConfirmation { original_hash };
        Ok(Message::new(from.id().clone(), to.id().clone(), metadata, ""))
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn person(&self, id: &PersonId) -> NetworkResult<&Person> {
        self.people.get(id).ok_or_else(|| {
            warn!(person = %id, "unknown person");
            ValidationError::UnknownPerson(id.clone()).into()
        })
    }

    fn participants(&self, sender: &str, receiver: &str) -> NetworkResult<(&Person, &Person)> {
        let from = self.person(&PersonId::from(sender))?;
        let to = self.person(&PersonId::from(receiver))?;

        if self.config.require_route && !self.graph.are_connected(from.id(), to.id()) {
            return Err(ValidationError::NoRoute {
                from: from.id().clone(),
                to: to.id().clone(),
            }
            .into());
        }
        Ok((from, to))
    }
}

fn expect_type(message: &Message, expected: MessageType) -> NetworkResult<()> {
    let actual = message.message_type();
    if actual != expected {
        return Err(NetworkError::WrongMessageType { expected, actual });
    }
    Ok(())
}

fn signed_digest(message: &Message) -> NetworkResult<Digest> {
    match &message.metadata {
        MessageMetadata::Signed { original_hash, .. } => Ok(*original_hash),
        other => Err(NetworkError::WrongMessageType {
            expected: MessageType::Signed,
            actual: other.message_type(),
        }),
    }
}

fn text_body(message: &Message) -> NetworkResult<&str> {
    message
        .body
        .as_text()
        .ok_or(NetworkError::InvalidBody { expected: "text" })
}

fn require_key(person: &Person, key: KeyKind) -> NetworkResult<&[u8]> {
    let found = match key {
        KeyKind::Public => person.public_key(),
        KeyKind::Private => person.private_key(),
    };
    found.ok_or_else(|| NetworkError::MissingKey {
        person: person.id().clone(),
        key,
    })
}
