//! Configuration for a validation run.
//! Built from CLI flags; fixed for the lifetime of one run.

pub mod run_config;

pub use run_config::{Policy, RunConfig};
