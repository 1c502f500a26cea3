//! Network configuration
//!
//! Defaults reproduce the permissive behaviour: connections to unknown
//! people are ignored and sending never checks reachability.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::crypto::keypair::{DEFAULT_KEY_BITS, MIN_KEY_BITS};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config is not valid JSON for [`NetworkConfig`]
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for a [`Network`](super::Network)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Reject `add_connection` calls naming unknown people
    pub strict_connections: bool,
    /// Refuse to send unless sender and receiver are connected
    pub require_route: bool,
    /// Modulus size for generated key pairs
    pub key_bits: usize,
    /// Ratio used by callers that do not pick one
    pub default_compression_ratio: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            strict_connections: false,
            require_route: false,
            key_bits: DEFAULT_KEY_BITS,
            default_compression_ratio: 0.5,
        }
    }
}

impl NetworkConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_bits < MIN_KEY_BITS {
            return Err(ConfigError::Invalid(format!(
                "key_bits must be at least {}, got {}",
                MIN_KEY_BITS, self.key_bits
            )));
        }
        let ratio = self.default_compression_ratio;
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "default_compression_ratio must be in (0, 1], got {}",
                ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let config = NetworkConfig::default();
        assert!(!config.strict_connections);
        assert!(!config.require_route);
        assert_eq!(config.key_bits, 2048);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = NetworkConfig::from_json(r#"{ "strict_connections": true }"#).unwrap();
        assert!(config.strict_connections);
        assert!(!config.require_route);
        assert_eq!(config.key_bits, 2048);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            NetworkConfig::from_json(r#"{ "key_bits": 256 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            NetworkConfig::from_json(r#"{ "default_compression_ratio": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            NetworkConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            NetworkConfig::from_file("/nonexistent/commnet.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
