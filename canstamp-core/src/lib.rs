//! Core types, traits, errors, and config for the canstamp log validator.
//!
//! canstamp checks the timestamp sequence of candump-style CAN log files,
//! where every line starts with a parenthesized timestamp in seconds:
//!
//! ```text
//! (1601712265.251039) can0 042##10000000000000000
//! ```
//!
//! This crate carries the pieces shared by the analysis engine and the CLI:
//! the checking policy configuration, the error taxonomy with its exit-code
//! mapping, and the cooperative cancellation seam.

pub mod config;
pub mod errors;
pub mod traits;

pub use config::{Policy, RunConfig};
pub use errors::{ConfigError, ParseError, RunError};
pub use traits::{Cancellable, CancellationToken};
