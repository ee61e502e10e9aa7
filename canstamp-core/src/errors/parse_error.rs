//! Line parsing errors.

use super::exit_code::{self, ExitCoded};

/// Errors that can occur while extracting a timestamp from a log line.
///
/// A malformed line is always fatal to the run; `--continue-on-error`
/// governs policy violations only, never parse failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed line {line}: '{raw}'")]
    MalformedLine { line: u64, raw: String },
}

impl ExitCoded for ParseError {
    fn exit_code(&self) -> i32 {
        exit_code::MALFORMED
    }
}
