//! Transform error types

use thiserror::Error;

/// Errors raised by body transforms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Compression ratio outside (0, 1]
    #[error("Invalid compression ratio {0}: must be in (0, 1]")]
    InvalidRatio(f64),

    /// Run-length input does not follow the `<count><char>` grammar
    #[error("Malformed run-length encoding at character {position}: {reason}")]
    MalformedEncoding {
        /// Character index where decoding stopped
        position: usize,
        /// What was wrong
        reason: &'static str,
    },

    /// A run-length count does not fit in a `usize`
    #[error("Run-length count overflows at character {position}")]
    RunLengthOverflow {
        /// Character index of the offending digit
        position: usize,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
