//! Error handling for canstamp.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Policy violations are not errors; they are values carried in the run
//! report. The enums here cover the genuinely fatal cases: malformed input,
//! invalid configuration, and I/O failure.

pub mod config_error;
pub mod exit_code;
pub mod parse_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use exit_code::ExitCoded;
pub use parse_error::ParseError;
pub use run_error::RunError;
