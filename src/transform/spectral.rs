//! Lossy spectral compression
//!
//! The body is read as a signal of code points, transformed with a DFT,
//! and every frequency bin from `floor(len * ratio)` upward is zeroed. The
//! inverse DFT is rounded and clamped to `0..=255`, then read back as
//! Latin-1 characters. Nothing in the output allows recovering the input.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::error::{TransformError, TransformResult};
use super::LossyCodec;
use crate::message::MessageType;

/// Frequency-truncating compressor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectralCompressor {
    ratio: f64,
}

impl SpectralCompressor {
    /// Create a compressor that keeps `ratio` of the frequency bins
    ///
    /// `ratio` must lie in `(0, 1]`.
    pub fn new(ratio: f64) -> TransformResult<Self> {
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            return Err(TransformError::InvalidRatio(ratio));
        }
        Ok(SpectralCompressor { ratio })
    }

    /// Fraction of bins kept
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// First zeroed bin for a signal of `len` samples
    pub fn cutoff(&self, len: usize) -> usize {
        ((len as f64) * self.ratio).floor() as usize
    }

    /// Compress a body
    ///
    /// Output has exactly as many characters as the input.
    pub fn compress(&self, body: &str) -> String {
        let mut signal: Vec<Complex<f64>> = body
            .chars()
            .map(|c| Complex::new(c as u32 as f64, 0.0))
            .collect();

        let len = signal.len();
        if len == 0 {
            return String::new();
        }

        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(len).process(&mut signal);

        let cutoff = self.cutoff(len).min(len);
        for bin in &mut signal[cutoff..] {
            *bin = Complex::new(0.0, 0.0);
        }

        planner.plan_fft_inverse(len).process(&mut signal);

        // rustfft leaves the inverse unnormalized
        let scale = len as f64;
        signal
            .iter()
            .map(|sample| {
                let value = (sample.re / scale).round().clamp(0.0, 255.0);
                char::from(value as u8)
            })
            .collect()
    }
}

impl LossyCodec for SpectralCompressor {
    const MESSAGE_TYPE: MessageType = MessageType::FftCompressed;

    fn degrade(&self, body: &str) -> String {
        self.compress(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(
            SpectralCompressor::new(0.0).unwrap_err(),
            TransformError::InvalidRatio(0.0)
        );
        assert!(SpectralCompressor::new(1.5).is_err());
        assert!(SpectralCompressor::new(-0.2).is_err());
        assert!(SpectralCompressor::new(f64::NAN).is_err());
        assert!(SpectralCompressor::new(1.0).is_ok());
        assert!(SpectralCompressor::new(0.01).is_ok());
    }

    #[test]
    fn test_cutoff_truncates() {
        let compressor = SpectralCompressor::new(0.5).unwrap();
        assert_eq!(compressor.cutoff(21), 10);
        assert_eq!(compressor.cutoff(0), 0);

        let full = SpectralCompressor::new(1.0).unwrap();
        assert_eq!(full.cutoff(21), 21);
    }

    #[test]
    fn test_preserves_length() {
        let body = "FFT compression test.";
        for ratio in [0.1, 0.5, 0.9, 1.0] {
            let compressed = SpectralCompressor::new(ratio).unwrap().compress(body);
            assert_eq!(compressed.chars().count(), body.chars().count());
        }
    }

    #[test]
    fn test_empty_body() {
        let compressor = SpectralCompressor::new(0.5).unwrap();
        assert_eq!(compressor.compress(""), "");
    }

    #[test]
    fn test_full_ratio_is_identity_for_ascii() {
        let body = "This is a test message for compression ratios.";
        let compressor = SpectralCompressor::new(1.0).unwrap();
        assert_eq!(compressor.compress(body), body);
    }

    #[test]
    fn test_full_ratio_clamps_wide_code_points() {
        let compressor = SpectralCompressor::new(1.0).unwrap();
        assert_eq!(compressor.compress("a€"), "a\u{ff}");
    }

    #[test]
    fn test_lossy_below_full_ratio() {
        let body = "This is a test message for compression ratios.";

        let high = SpectralCompressor::new(0.9).unwrap().compress(body);
        let low = SpectralCompressor::new(0.1).unwrap().compress(body);

        assert_ne!(high, body);
        assert_ne!(low, body);
        assert_ne!(high, low);
    }

    #[test]
    fn test_constant_signal_survives_any_ratio() {
        // All energy sits in bin 0, which is always kept
        let body = "aaaaaaaa";
        let compressor = SpectralCompressor::new(0.2).unwrap();
        assert_eq!(compressor.compress(body), body);
    }
}
