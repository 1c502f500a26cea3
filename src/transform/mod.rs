//! Body transforms
//!
//! Two kinds of transform exist:
//! - [`LosslessCodec`]: a forward encoding with an exact inverse (`rle`)
//! - [`LossyCodec`]: a one-way degradation with no inverse (`spectral`)
//!
//! Encryption and signing also transform messages but need key material,
//! so they live in [`crate::crypto`] and are driven by the network façade.

pub mod error;
pub mod rle;
pub mod spectral;

pub use error::{TransformError, TransformResult};
pub use rle::RunLength;
pub use spectral::SpectralCompressor;

use crate::message::MessageType;

/// A reversible body encoding
pub trait LosslessCodec {
    /// Tag stamped on messages this codec produces
    const MESSAGE_TYPE: MessageType;

    /// Encode a body
    fn encode(&self, body: &str) -> String;

    /// Recover the body from its encoding
    fn decode(&self, encoded: &str) -> TransformResult<String>;
}

/// A one-way body degradation
///
/// The output is the delivered payload and has no inverse.
pub trait LossyCodec {
    /// Tag stamped on messages this codec produces
    const MESSAGE_TYPE: MessageType;

    /// Degrade a body
    fn degrade(&self, body: &str) -> String;
}
