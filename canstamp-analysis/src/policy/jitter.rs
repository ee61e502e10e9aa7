//! Periodic jitter check.

use crate::parser::Sample;
use crate::report::Violation;

use super::Check;

/// Checks that consecutive timestamps keep the expected fixed spacing.
///
/// The deviation is measured against the expected next arrival
/// (`prev + interval`), not against the previous delta. Combined with the
/// driver's unconditional baseline update, each comparison starts from the
/// actually observed sample, so a clock jump is flagged at the step it
/// happens and the next step is judged on its own.
#[derive(Debug, Clone, Copy)]
pub struct JitterCheck {
    interval_ms: f64,
    threshold_ms: f64,
}

impl JitterCheck {
    /// Parameters in milliseconds, already validated by the policy config
    /// (interval > 0, 0 < threshold < interval).
    pub fn new(interval_ms: u64, threshold_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            threshold_ms: threshold_ms as f64,
        }
    }
}

impl Check for JitterCheck {
    fn inspect(&self, prev: Option<&Sample>, cur: &Sample) -> Vec<Violation> {
        let Some(prev) = prev else {
            return Vec::new();
        };

        // All comparison happens in milliseconds.
        let target = prev.seconds * 1000.0 + self.interval_ms;
        let delta = target - cur.seconds * 1000.0;

        // Strictly greater: a deviation exactly at the threshold passes.
        if delta.abs() > self.threshold_ms {
            vec![Violation::JitterViolation {
                prev_line: prev.line,
                line: cur.line,
                delta_ms: delta.abs(),
                threshold_ms: self.threshold_ms,
            }]
        } else {
            Vec::new()
        }
    }
}
