//! Validation engine for canstamp: line parsing, check policies, and the
//! run driver.
//!
//! The engine is a straight linear scan. The parser extracts a timestamp
//! from each line, the selected [`policy::Check`] inspects each consecutive
//! pair, and the [`runner::Runner`] sequences the two while tracking line
//! numbers, streaming violations to a sink, and composing the final
//! [`report::RunReport`].

pub mod parser;
pub mod policy;
pub mod report;
pub mod runner;

pub use parser::{parse_line, Sample};
pub use policy::{check_for, Check, JitterCheck, MonotonicCheck};
pub use report::{NullSink, RunReport, StderrSink, Violation, ViolationSink};
pub use runner::Runner;
