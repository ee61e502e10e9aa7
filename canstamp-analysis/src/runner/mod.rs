//! Run driver: sequences the parser and the selected check over an input
//! stream.

use std::io::BufRead;

use canstamp_core::config::RunConfig;
use canstamp_core::errors::{ConfigError, RunError};
use canstamp_core::traits::{Cancellable, CancellationToken};

use crate::parser::{parse_line, Sample};
use crate::policy::{check_for, Check};
use crate::report::{RunReport, ViolationSink};

/// Drives one validation run over a line stream.
///
/// Owns the only piece of carried state, the previous-sample baseline, which
/// is updated exactly once per parsed line, strictly after the check, and
/// unconditionally even when the line violated the policy.
pub struct Runner {
    config: RunConfig,
    check: Box<dyn Check>,
    cancel: CancellationToken,
}

impl Runner {
    /// Build a runner, validating the policy configuration up front.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.policy.validate()?;
        let check = check_for(&config.policy);
        Ok(Self {
            config,
            check,
            cancel: CancellationToken::new(),
        })
    }

    /// Use an externally owned cancellation token (the CLI wires its signal
    /// handler to one).
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Scan the input and compose the run report.
    ///
    /// Violations are streamed to `sink` at the point of occurrence and
    /// recorded in the report. Without continue-on-error the run returns
    /// after the first violating line. A malformed line or an I/O failure
    /// aborts the run with an error regardless of continue-on-error. A
    /// cancellation request stops the scan cleanly with `interrupted` set.
    pub fn run<R: BufRead>(
        &self,
        input: R,
        sink: &mut dyn ViolationSink,
    ) -> Result<RunReport, RunError> {
        let mut report = RunReport::default();
        let mut prev: Option<Sample> = None;
        let mut lines = input.lines();

        loop {
            // Poll before touching the input so a pending cancellation wins
            // over a read that may block indefinitely on a quiet stream.
            if self.cancel.is_cancelled() {
                report.interrupted = true;
                tracing::debug!(lines = report.lines, "run interrupted");
                return Ok(report);
            }

            let Some(line) = lines.next() else {
                break;
            };
            let raw = line?;
            let line_no = report.lines + 1;
            let sample = parse_line(line_no, &raw)?;
            report.lines += 1;

            let mut halt = false;
            for violation in self.check.inspect(prev.as_ref(), &sample) {
                sink.on_violation(&violation);
                report.violations += 1;
                if !self.config.continue_on_error {
                    halt = true;
                    break;
                }
            }

            // Anti-cascade rule: the violating value becomes the new
            // baseline.
            prev = Some(sample);

            if halt {
                break;
            }
        }

        tracing::debug!(
            lines = report.lines,
            violations = report.violations,
            "run complete"
        );
        Ok(report)
    }
}
