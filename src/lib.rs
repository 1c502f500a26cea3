//! # commnet
//!
//! A small contact network whose messages pass through interchangeable
//! transforms.
//!
//! ## Features
//!
//! - **Run-length compression** (lossless, digit-free bodies)
//! - **Spectral compression** (lossy, one-way DFT truncation)
//! - **Asymmetric encryption** with RSA-OAEP
//! - **Digital signatures** with RSA-PSS over SHA-256 digests
//! - **Contact graph** with breadth-first reachability and shortest paths
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use commnet::{KeyPair, Network, Person};
//!
//! let mut network = Network::new();
//! network.add_person(Person::with_keys("alice", &KeyPair::generate().unwrap()));
//! network.add_person(Person::with_keys("bob", &KeyPair::generate().unwrap()));
//! network.add_connection("alice", "bob").unwrap();
//!
//! // Lossless round trip
//! let message = network.send_rle("alice", "bob", "AABBB").unwrap();
//! assert_eq!(network.receive_rle(&message).unwrap(), "AABBB");
//!
//! // Signed, then checked against alice's registered key
//! let signed = network.send_signed("alice", "bob", "I agree").unwrap();
//! assert!(network.verify_signed(&signed));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               NETWORK FAÇADE                │
//! │  registry | contact graph | send/receive    │
//! └──────────┬──────────────────────┬───────────┘
//!            │                      │
//! ┌──────────▼──────────┐ ┌─────────▼───────────┐
//! │     TRANSFORMS      │ │       CRYPTO        │
//! │  RLE  |  Spectral   │ │ OAEP | PSS | SHA-256│
//! └──────────┬──────────┘ └─────────┬───────────┘
//!            │                      │
//! ┌──────────▼──────────────────────▼───────────┐
//! │                 DATA MODEL                  │
//! │  Person | Message | MessageMetadata         │
//! └─────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crypto;
pub mod graph;
pub mod message;
pub mod network;
pub mod person;
pub mod transform;

#[cfg(test)]
mod proptests;

// Re-export main types at crate root
pub use crypto::{CryptoError, CryptoResult, Digest, KeyPair, Signature};
pub use graph::ContactGraph;
pub use message::{Message, MessageBody, MessageMetadata, MessageType};
pub use network::{Network, NetworkConfig, NetworkError, NetworkResult, ValidationError};
pub use person::{KeyKind, Person, PersonId, PrivateKeyBlob, PublicKeyBlob};
pub use transform::{RunLength, SpectralCompressor, TransformError, TransformResult};
