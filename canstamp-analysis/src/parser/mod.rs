//! Line parser: extracts the leading parenthesized timestamp from a
//! candump-style log line.
//!
//! The consumed format is `(1601712265.251039) can0 042##1...`: optional
//! leading whitespace, a parenthesized signed fixed-point number with a
//! mandatory decimal point, then at least one whitespace character. The rest
//! of the line is payload and is ignored.

use std::sync::OnceLock;

use regex::Regex;

use canstamp_core::errors::ParseError;

/// A timestamp successfully extracted from one log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// 1-based line number within the stream.
    pub line: u64,
    /// Timestamp in seconds. f64 keeps microsecond deltas exact enough for
    /// the CAN-bus resolutions this checks.
    pub seconds: f64,
}

/// Timestamp pattern. Integers without a decimal point do not match.
const TIMESTAMP_PATTERN: &str = r"^\s*\(([+-]?\d+\.\d*)\)\s+";

fn timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern compiles"))
}

/// Extract the timestamp from a raw line.
///
/// Fails with [`ParseError::MalformedLine`] when the pattern does not match
/// at the start of the line. Parse failure is always fatal to a run.
pub fn parse_line(line: u64, raw: &str) -> Result<Sample, ParseError> {
    let malformed = || ParseError::MalformedLine {
        line,
        raw: raw.to_string(),
    };

    let caps = timestamp_re().captures(raw).ok_or_else(|| malformed())?;
    let seconds: f64 = caps[1].parse().map_err(|_| malformed())?;

    Ok(Sample { line, seconds })
}
