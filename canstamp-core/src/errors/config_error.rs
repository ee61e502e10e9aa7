//! Configuration errors.

use super::exit_code::{self, ExitCoded};

/// Errors that can occur while validating a checking policy configuration.
///
/// All of these are detected before the first input line is read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("argument to --interval-ms must be positive")]
    NonPositiveInterval,

    #[error("argument to --threshold-ms must be positive")]
    NonPositiveThreshold,

    #[error("tolerance must not exceed interval ({threshold_ms} ms >= {interval_ms} ms)")]
    ThresholdExceedsInterval { interval_ms: u64, threshold_ms: u64 },
}

impl ExitCoded for ConfigError {
    fn exit_code(&self) -> i32 {
        exit_code::CONFIG
    }
}
