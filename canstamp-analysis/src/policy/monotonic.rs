//! Monotonicity check, with optional strictness and non-negativity.

use crate::parser::Sample;
use crate::report::Violation;

use super::Check;

/// Checks that timestamps never decrease.
///
/// `strict` additionally rejects equal consecutive timestamps.
/// `require_non_negative` rejects timestamps below zero, including on the
/// first line, which is otherwise only a baseline seed.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicCheck {
    pub strict: bool,
    pub require_non_negative: bool,
}

impl Check for MonotonicCheck {
    fn inspect(&self, prev: Option<&Sample>, cur: &Sample) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.require_non_negative && cur.seconds < 0.0 {
            violations.push(Violation::NegativeTimestamp {
                line: cur.line,
                seconds: cur.seconds,
            });
        }

        if let Some(prev) = prev {
            let out_of_order = if self.strict {
                cur.seconds <= prev.seconds
            } else {
                cur.seconds < prev.seconds
            };
            if out_of_order {
                violations.push(Violation::OrderViolation {
                    prev_line: prev.line,
                    line: cur.line,
                    prev_seconds: prev.seconds,
                    seconds: cur.seconds,
                });
            }
        }

        violations
    }
}
