//! canstamp — timestamp sequence checks for candump-style CAN log files.
//!
//! Every input line must start with a parenthesized timestamp in seconds,
//! as produced by `candump -L`:
//!
//! ```text
//! (1601712265.251039) can0 042##10000000000000000
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Timestamps must never decrease
//! canstamp mono trace.log
//!
//! # ... and must strictly increase
//! canstamp mono --strict trace.log
//!
//! # ... and must not be negative
//! canstamp nonneg trace.log
//!
//! # Messages expected every 10 ms, up to 1 ms of jitter tolerated
//! candump -L can0 | canstamp delta --interval-ms 10 --threshold-ms 1
//! ```
//!
//! Exit status: 0 clean (or interrupted), 1 policy violation, 2 bad usage,
//! 65 malformed input line, 74 I/O error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use canstamp_analysis::report::{NullSink, StderrSink, ViolationSink};
use canstamp_analysis::Runner;
use canstamp_core::config::{Policy, RunConfig};
use canstamp_core::errors::exit_code::{self, ExitCoded};
use canstamp_core::traits::CancellationToken;

#[derive(Parser)]
#[command(name = "canstamp")]
#[command(about = "Timestamp sequence checks for candump-style CAN log files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for timestamp monotony.
    Mono {
        /// Also reject equal consecutive timestamps.
        #[arg(long)]
        strict: bool,

        /// Report violations but keep scanning; exit non-zero at the end if
        /// any were found.
        #[arg(long)]
        continue_on_error: bool,

        /// Suppress per-violation output.
        #[arg(short, long)]
        quiet: bool,

        /// Read from FILE, else STDIN.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Check that timestamps are non-negative and monotonic.
    Nonneg {
        /// Report violations but keep scanning; exit non-zero at the end if
        /// any were found.
        #[arg(long)]
        continue_on_error: bool,

        /// Suppress per-violation output.
        #[arg(short, long)]
        quiet: bool,

        /// Read from FILE, else STDIN.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Check for out-of-bounds timestamp deltas.
    Delta {
        /// Interval between messages in milliseconds.
        #[arg(long, value_name = "N")]
        interval_ms: u64,

        /// Tolerable jitter in milliseconds.
        #[arg(long, value_name = "N", default_value_t = 1)]
        threshold_ms: u64,

        /// Report violations but keep scanning; exit non-zero at the end if
        /// any were found.
        #[arg(long)]
        continue_on_error: bool,

        /// Suppress per-violation output.
        #[arg(short, long)]
        quiet: bool,

        /// Read from FILE, else STDIN.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

impl Commands {
    /// Lower the parsed subcommand to a run configuration and input path.
    fn into_run(self) -> (RunConfig, Option<PathBuf>) {
        match self {
            Commands::Mono {
                strict,
                continue_on_error,
                quiet,
                file,
            } => {
                let policy = if strict {
                    Policy::StrictMonotonic
                } else {
                    Policy::Monotonic
                };
                (
                    RunConfig {
                        policy,
                        continue_on_error,
                        quiet,
                    },
                    file,
                )
            }
            Commands::Nonneg {
                continue_on_error,
                quiet,
                file,
            } => (
                RunConfig {
                    policy: Policy::NonNegativeMonotonic,
                    continue_on_error,
                    quiet,
                },
                file,
            ),
            Commands::Delta {
                interval_ms,
                threshold_ms,
                continue_on_error,
                quiet,
                file,
            } => (
                RunConfig {
                    policy: Policy::PeriodicJitter {
                        interval_ms,
                        threshold_ms,
                    },
                    continue_on_error,
                    quiet,
                },
                file,
            ),
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let (config, file) = cli.command.into_run();

    install_interrupt_handler();

    process::exit(execute(config, file, CancellationToken::new()));
}

/// Run one validation and return the process exit status.
fn execute(config: RunConfig, file: Option<PathBuf>, token: CancellationToken) -> i32 {
    let quiet = config.quiet;

    let runner = match Runner::new(config) {
        Ok(runner) => runner.with_cancellation(token),
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    let input: Box<dyn BufRead> = match &file {
        Some(path) => match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                eprintln!("failed to open {}: {e}", path.display());
                return exit_code::IO;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut stderr_sink = StderrSink;
    let mut null_sink = NullSink;
    let sink: &mut dyn ViolationSink = if quiet {
        &mut null_sink
    } else {
        &mut stderr_sink
    };

    match runner.run(input, sink) {
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
        Ok(report) if report.interrupted => {
            tracing::debug!(lines = report.lines, "interrupted, exiting cleanly");
            exit_code::OK
        }
        Ok(report) if report.is_clean() => exit_code::OK,
        Ok(_) => exit_code::VIOLATION,
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CANSTAMP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Signal handler for SIGINT + SIGTERM (avoids pulling in the ctrlc crate).
///
/// An interrupted run is a clean stop, not a failure, so the handler exits
/// the process directly with status 0. `_exit` is async-signal-safe, and a
/// scan blocked on a quiet stream (glibc restarts the interrupted read)
/// would otherwise not notice a cancellation token until the next line
/// arrives. The token stays the cancellation seam for embedders of the
/// analysis crate.
fn install_interrupt_handler() {
    extern "C" fn handler(_: libc::c_int) {
        unsafe { libc::_exit(exit_code::OK) }
    }

    unsafe {
        let h = handler as *const () as libc::sighandler_t;
        libc::signal(libc::SIGINT, h);
        libc::signal(libc::SIGTERM, h);
    }
}
