//! Violations, sinks, and the per-run report.

use std::fmt;

/// A single policy violation, tied to the line (or line pair) it occurred on.
///
/// Violations are values, not errors: whether one aborts the run is decided
/// by the driver's continue-on-error setting.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A timestamp below zero under a non-negative policy.
    NegativeTimestamp { line: u64, seconds: f64 },
    /// A timestamp that went backwards (or failed to advance, in strict
    /// mode) relative to the previous line.
    OrderViolation {
        prev_line: u64,
        line: u64,
        prev_seconds: f64,
        seconds: f64,
    },
    /// A timestamp outside the tolerance window around the expected spacing.
    /// `delta_ms` is the absolute deviation from the expected arrival.
    JitterViolation {
        prev_line: u64,
        line: u64,
        delta_ms: f64,
        threshold_ms: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::NegativeTimestamp { line, seconds } => {
                write!(f, "line {line}: negative timestamp {seconds}")
            }
            Violation::OrderViolation {
                prev_line,
                line,
                prev_seconds,
                seconds,
            } => {
                write!(f, "line {prev_line}-{line}: {prev_seconds} > {seconds}")
            }
            Violation::JitterViolation {
                prev_line,
                line,
                delta_ms,
                threshold_ms,
            } => {
                write!(f, "line {prev_line}-{line}: {delta_ms} > {threshold_ms} [ms]")
            }
        }
    }
}

/// Receives each violation at the point of occurrence, before the run
/// decides whether to halt.
pub trait ViolationSink {
    fn on_violation(&mut self, violation: &Violation);
}

/// Sink that prints one diagnostic line per violation to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl ViolationSink for StderrSink {
    fn on_violation(&mut self, violation: &Violation) {
        eprintln!("{violation}");
    }
}

/// Collecting sinks for tests and quiet mode.
impl ViolationSink for Vec<Violation> {
    fn on_violation(&mut self, violation: &Violation) {
        self.push(violation.clone());
    }
}

/// Sink that discards everything (quiet mode; the report still records).
#[derive(Debug, Default)]
pub struct NullSink;

impl ViolationSink for NullSink {
    fn on_violation(&mut self, _violation: &Violation) {}
}

/// Outcome of one validation run.
///
/// Carries only counts: a continue-on-error run over an arbitrarily long
/// stream must not grow with the number of violations. The full values flow
/// through the sink at the point of occurrence; the report only has to
/// answer "did anything violate" for the final exit status.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of successfully parsed lines.
    pub lines: u64,
    /// Number of violations recorded during the run.
    pub violations: u64,
    /// The run was cut short by a cancellation request. Treated as a clean
    /// stop, never as a failure.
    pub interrupted: bool,
}

impl RunReport {
    /// Returns true if no violation was recorded.
    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }
}
