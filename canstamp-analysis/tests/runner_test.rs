//! Run driver tests: fatal parse failures, cancellation, stream edges.

use std::io::{self, Cursor, Read};

use canstamp_analysis::report::{NullSink, Violation};
use canstamp_analysis::Runner;
use canstamp_core::config::{Policy, RunConfig};
use canstamp_core::errors::exit_code::{self, ExitCoded};
use canstamp_core::errors::{ParseError, RunError};
use canstamp_core::traits::{Cancellable, CancellationToken};

fn runner(policy: Policy, continue_on_error: bool) -> Runner {
    Runner::new(RunConfig {
        policy,
        continue_on_error,
        quiet: false,
    })
    .unwrap()
}

#[test]
fn test_empty_input_is_clean() {
    let mut sink: Vec<Violation> = Vec::new();
    let report = runner(Policy::Monotonic, false)
        .run(Cursor::new(""), &mut sink)
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.lines, 0);
}

#[test]
fn test_single_line_only_seeds_baseline() {
    let mut sink: Vec<Violation> = Vec::new();
    let report = runner(Policy::StrictMonotonic, false)
        .run(Cursor::new("(5.0) can0 042#00\n"), &mut sink)
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.lines, 1);
}

#[test]
fn test_malformed_line_is_fatal() {
    let input = "(1.0) a b\nhello world\n(2.0) a b\n";
    let mut sink: Vec<Violation> = Vec::new();
    let err = runner(Policy::Monotonic, false)
        .run(Cursor::new(input), &mut sink)
        .unwrap_err();
    match err {
        RunError::Parse(ParseError::MalformedLine { line, raw }) => {
            assert_eq!(line, 2);
            assert_eq!(raw, "hello world");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_malformed_line_is_fatal_even_with_continue_on_error() {
    let input = "(1.0) a b\nhello world\n";
    let mut sink: Vec<Violation> = Vec::new();
    let err = runner(Policy::Monotonic, true)
        .run(Cursor::new(input), &mut sink)
        .unwrap_err();
    assert!(matches!(err, RunError::Parse(_)));
    assert_eq!(err.exit_code(), exit_code::MALFORMED);
}

#[test]
fn test_malformed_exit_code_is_distinct_from_violation() {
    assert_ne!(exit_code::MALFORMED, exit_code::VIOLATION);
    assert_ne!(exit_code::MALFORMED, exit_code::OK);
}

#[test]
fn test_cancelled_run_stops_cleanly() {
    let token = CancellationToken::new();
    token.cancel();

    let mut sink: Vec<Violation> = Vec::new();
    let report = runner(Policy::Monotonic, false)
        .with_cancellation(token)
        .run(Cursor::new("(2.0) a b\n(1.0) a b\n"), &mut sink)
        .unwrap();
    assert!(report.interrupted);
    assert!(report.is_clean());
    assert_eq!(report.lines, 0);
}

#[test]
fn test_quiet_runs_still_record_violations() {
    let input = "(2.0) a b\n(1.0) a b\n";
    let mut sink = NullSink;
    let report = runner(Policy::Monotonic, true)
        .run(Cursor::new(input), &mut sink)
        .unwrap();
    assert_eq!(report.violations, 1);
}

/// Reader that blocks before yielding its only line, like a quiet tty or a
/// pipe whose writer has gone silent.
struct SlowReader {
    line: Option<&'static [u8]>,
}

impl Read for SlowReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        std::thread::sleep(std::time::Duration::from_secs(2));
        match self.line.take() {
            Some(data) => {
                buf[..data.len()].copy_from_slice(data);
                Ok(data.len())
            }
            None => Ok(0),
        }
    }
}

#[test]
fn test_pending_cancellation_wins_over_a_blocking_read() {
    let token = CancellationToken::new();
    token.cancel();

    let input = io::BufReader::new(SlowReader {
        line: Some(b"(1.0) can0 042#00\n"),
    });
    let mut sink: Vec<Violation> = Vec::new();
    let start = std::time::Instant::now();
    let report = runner(Policy::Monotonic, false)
        .with_cancellation(token)
        .run(input, &mut sink)
        .unwrap();

    assert!(report.interrupted);
    assert_eq!(report.lines, 0);
    assert!(
        start.elapsed() < std::time::Duration::from_millis(500),
        "cancelled run must return without waiting on input"
    );
}

/// Reader that flips the cancellation token while producing its data, the
/// way a signal arriving mid-stream would.
struct CancellingReader {
    token: CancellationToken,
    data: Option<&'static [u8]>,
}

impl Read for CancellingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.token.cancel();
        match self.data.take() {
            Some(data) => {
                buf[..data.len()].copy_from_slice(data);
                Ok(data.len())
            }
            None => Ok(0),
        }
    }
}

#[test]
fn test_mid_stream_cancellation_stops_before_the_next_line() {
    let token = CancellationToken::new();
    let input = io::BufReader::new(CancellingReader {
        token: token.clone(),
        data: Some(b"(1.0) a b\n(2.0) a b\n"),
    });

    let mut sink: Vec<Violation> = Vec::new();
    let report = runner(Policy::Monotonic, false)
        .with_cancellation(token)
        .run(input, &mut sink)
        .unwrap();

    // The line already read is processed, the buffered second line is not.
    assert!(report.interrupted);
    assert_eq!(report.lines, 1);
}

/// Reader whose first fill fails, to exercise I/O error propagation.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
    }
}

#[test]
fn test_io_failure_aborts_with_io_status() {
    let mut sink: Vec<Violation> = Vec::new();
    let err = runner(Policy::Monotonic, false)
        .run(io::BufReader::new(BrokenReader), &mut sink)
        .unwrap_err();
    assert!(matches!(err, RunError::Io(_)));
    assert_eq!(err.exit_code(), exit_code::IO);
}
