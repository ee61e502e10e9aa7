//! Run-level fatal errors.

use super::exit_code::{self, ExitCoded};
use super::{ConfigError, ParseError};

/// Errors that abort a validation run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ExitCoded for RunError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(e) => e.exit_code(),
            Self::Config(e) => e.exit_code(),
            Self::Io(_) => exit_code::IO,
        }
    }
}
