//! Process exit statuses and the error-to-status mapping.
//!
//! The original shell utilities exited with `-1` on malformed input, which
//! most platforms clamp to 255. canstamp uses stable sysexits-style codes
//! instead, keeping the malformed-input sentinel distinct from the policy
//! violation status.

/// Clean run, or a run cut short by SIGINT/SIGTERM.
pub const OK: i32 = 0;
/// At least one policy violation was recorded.
pub const VIOLATION: i32 = 1;
/// Invalid configuration or usage (also clap's own usage-error status).
pub const CONFIG: i32 = 2;
/// A line did not match the timestamp pattern (`EX_DATAERR`).
pub const MALFORMED: i32 = 65;
/// The input could not be read (`EX_IOERR`).
pub const IO: i32 = 74;

/// Maps an error to the process exit status the CLI terminates with.
pub trait ExitCoded {
    fn exit_code(&self) -> i32;
}
