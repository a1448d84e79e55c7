//! Configuration types for the signature scheme.
//!
//! This module provides the validated configuration value types consumed
//! by setup and key distribution: [`SchemeConfig`] fixes the identity and
//! message bit lengths, [`ThresholdConfig`] fixes the `(t, n)` sharing
//! parameters.
//!
//! # Example
//!
//! ```rust
//! use tibs::{SchemeConfig, ThresholdConfig};
//!
//! // Identities of 5 bits, messages of 10 bits, 3-of-10 signing.
//! let scheme = SchemeConfig::new(5, 10).expect("valid lengths");
//! let threshold = ThresholdConfig::new(10, 3).expect("valid threshold");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Bit lengths of the identity and message spaces.
///
/// Both lengths are fixed once at scheme construction. Every identity
/// handed to key extraction and every message handed to signing must have
/// exactly these lengths; operations reject other inputs before any group
/// arithmetic runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Number of bits in an identity (`n_u`).
    pub identity_bits: usize,
    /// Number of bits in a message (`n_m`).
    pub message_bits: usize,
}

impl SchemeConfig {
    /// Creates and validates a scheme configuration.
    pub fn new(identity_bits: usize, message_bits: usize) -> Result<Self, Error> {
        let config = Self {
            identity_bits,
            message_bits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Both bit lengths must be non-zero; a zero-length identity or
    /// message space collapses the multiplier to its base element for
    /// every input.
    pub fn validate(&self) -> Result<(), Error> {
        if self.identity_bits == 0 {
            return Err(Error::InvalidConfig(
                "identity bit length must be greater than 0".into(),
            ));
        }
        if self.message_bits == 0 {
            return Err(Error::InvalidConfig(
                "message bit length must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// `(t, n)` parameters for threshold key distribution.
///
/// A private key is split across `servers` shareholders such that any
/// `threshold` of them can produce a verifying signature. Fewer than
/// `threshold` shares reconstruct a well-formed signature that fails
/// verification; that silent failure is the threshold property itself,
/// so no runtime check distinguishes the two cases.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Total number of shareholding servers (`n`).
    pub servers: usize,
    /// Minimum number of cooperating servers (`t`).
    pub threshold: usize,
}

impl ThresholdConfig {
    /// Creates and validates a threshold configuration.
    pub fn new(servers: usize, threshold: usize) -> Result<Self, Error> {
        let config = Self { servers, threshold };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration: `1 <= threshold <= servers`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.servers == 0 {
            return Err(Error::InvalidConfig(
                "need at least one server to distribute a key".into(),
            ));
        }
        if self.threshold == 0 || self.threshold > self.servers {
            return Err(Error::InvalidConfig(
                "threshold must be within [1, servers]".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_config_rejects_zero_lengths() {
        assert!(SchemeConfig::new(0, 10).is_err());
        assert!(SchemeConfig::new(5, 0).is_err());
        assert!(SchemeConfig::new(5, 10).is_ok());
    }

    #[test]
    fn threshold_config_bounds() {
        assert!(ThresholdConfig::new(10, 3).is_ok());
        assert!(ThresholdConfig::new(10, 10).is_ok());
        assert!(ThresholdConfig::new(10, 11).is_err());
        assert!(ThresholdConfig::new(10, 0).is_err());
        assert!(ThresholdConfig::new(0, 0).is_err());
    }
}
