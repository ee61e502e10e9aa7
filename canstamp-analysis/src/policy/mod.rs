//! Check policies: interchangeable per-pair predicates over the timestamp
//! sequence.
//!
//! Each policy implements the [`Check`] trait and is selected from the
//! configured [`Policy`] variant by [`check_for`]. Checks are stateless; the
//! run driver owns the previous-sample baseline and updates it
//! unconditionally after every parsed line, so a single glitch is flagged
//! once instead of cascading against a stale reference.

pub mod jitter;
pub mod monotonic;

pub use jitter::JitterCheck;
pub use monotonic::MonotonicCheck;

use canstamp_core::config::Policy;

use crate::parser::Sample;
use crate::report::Violation;

/// A per-pair check over the parsed timestamp sequence.
pub trait Check {
    /// Inspect the newest sample against the baseline.
    ///
    /// `prev` is absent for the first parsed line, which only seeds the
    /// baseline. A single line can produce more than one violation (a
    /// negative timestamp that also goes backwards).
    fn inspect(&self, prev: Option<&Sample>, cur: &Sample) -> Vec<Violation>;
}

/// Select the check implementation for a policy.
pub fn check_for(policy: &Policy) -> Box<dyn Check> {
    match *policy {
        Policy::Monotonic => Box::new(MonotonicCheck {
            strict: false,
            require_non_negative: false,
        }),
        Policy::StrictMonotonic => Box::new(MonotonicCheck {
            strict: true,
            require_non_negative: false,
        }),
        Policy::NonNegativeMonotonic => Box::new(MonotonicCheck {
            strict: false,
            require_non_negative: true,
        }),
        Policy::PeriodicJitter {
            interval_ms,
            threshold_ms,
        } => Box::new(JitterCheck::new(interval_ms, threshold_ms)),
    }
}
