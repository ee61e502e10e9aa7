//! Checking policy selection and run configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The checking policy applied to the timestamp sequence.
///
/// `Monotonic` and `StrictMonotonic` are distinct on purpose: the original
/// utilities disagreed on whether equal consecutive timestamps are allowed,
/// and both behaviors remain selectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Every timestamp must be >= the previous one.
    #[default]
    Monotonic,
    /// Every timestamp must be > the previous one.
    StrictMonotonic,
    /// Monotonic, plus every timestamp must be >= 0.
    NonNegativeMonotonic,
    /// Consecutive timestamps must land within `threshold_ms` of the
    /// expected `interval_ms` spacing.
    PeriodicJitter { interval_ms: u64, threshold_ms: u64 },
}

impl Policy {
    /// Validate the configuration before any input is read.
    ///
    /// Only the jitter policy carries parameters: the interval and threshold
    /// must be positive and the threshold strictly below the interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Policy::PeriodicJitter {
                interval_ms,
                threshold_ms,
            } => {
                if interval_ms == 0 {
                    return Err(ConfigError::NonPositiveInterval);
                }
                if threshold_ms == 0 {
                    return Err(ConfigError::NonPositiveThreshold);
                }
                if threshold_ms >= interval_ms {
                    return Err(ConfigError::ThresholdExceedsInterval {
                        interval_ms,
                        threshold_ms,
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Configuration for one validation run. Not mutated mid-stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// The checking policy to apply.
    pub policy: Policy,
    /// Record policy violations and keep scanning instead of halting on the
    /// first one. Malformed lines stay fatal regardless.
    pub continue_on_error: bool,
    /// Suppress per-violation diagnostics; the exit status is unaffected.
    pub quiet: bool,
}

impl RunConfig {
    /// Convenience constructor for the common flag-free case.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            continue_on_error: false,
            quiet: false,
        }
    }
}
