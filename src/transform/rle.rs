//! Run-length encoding
//!
//! Each maximal run of a repeated character becomes `<count><char>`, the
//! count in decimal with no separator: `"AABBB"` encodes to `"2A3B"`.
//!
//! The scheme cannot tell a literal digit from a count digit, so bodies
//! containing decimal digits do not survive a round trip. `"11"` encodes
//! to `"21"`, which decodes as a dangling count.

use super::error::{TransformError, TransformResult};
use super::LosslessCodec;
use crate::message::MessageType;

/// Run-length codec
#[derive(Clone, Copy, Debug, Default)]
pub struct RunLength;

impl RunLength {
    /// Encode a body
    pub fn encode(input: &str) -> String {
        let mut encoded = String::with_capacity(input.len());
        let mut chars = input.chars();

        let Some(mut current) = chars.next() else {
            return encoded;
        };
        let mut count = 1usize;

        for c in chars {
            if c == current {
                count += 1;
            } else {
                push_run(&mut encoded, count, current);
                current = c;
                count = 1;
            }
        }
        push_run(&mut encoded, count, current);

        encoded
    }

    /// Decode an encoded body
    ///
    /// Fails if a character has no count in front of it, if the input ends
    /// on digits, or if a count does not fit in a `usize`.
    pub fn decode(encoded: &str) -> TransformResult<String> {
        let mut decoded = String::with_capacity(encoded.len());
        let mut count: Option<usize> = None;

        for (position, c) in encoded.chars().enumerate() {
            if let Some(digit) = c.to_digit(10) {
                let next = count
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit as usize))
                    .ok_or(TransformError::RunLengthOverflow { position })?;
                count = Some(next);
                continue;
            }

            let run = count.take().ok_or(TransformError::MalformedEncoding {
                position,
                reason: "character without a preceding count",
            })?;

            decoded.extend(std::iter::repeat(c).take(run));
        }

        if count.is_some() {
            return Err(TransformError::MalformedEncoding {
                position: encoded.chars().count(),
                reason: "count without a following character",
            });
        }

        Ok(decoded)
    }
}

impl LosslessCodec for RunLength {
    const MESSAGE_TYPE: MessageType = MessageType::RleCompressed;

    fn encode(&self, body: &str) -> String {
        RunLength::encode(body)
    }

    fn decode(&self, encoded: &str) -> TransformResult<String> {
        RunLength::decode(encoded)
    }
}

fn push_run(out: &mut String, count: usize, c: char) {
    out.push_str(&count.to_string());
    out.push(c);
}
