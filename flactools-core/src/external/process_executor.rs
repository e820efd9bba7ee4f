// ============================================================================
// flactools-core/src/external/process_executor.rs
// ============================================================================
//
// PROCESS EXECUTOR: Synchronous External Program Invocation
//
// This module provides the abstraction every core operation uses to run an
// external tool. A runner spawns the program with a fixed argument vector,
// captures stdout/stderr, blocks until exit and hands the bytes back. A
// non-zero exit code is returned as data: callers decide success by checking
// for the artifact they expect.
//
// KEY COMPONENTS:
// - ProcessOutput: Exit code plus captured stdout/stderr bytes
// - ProcessRunner: Trait for anything that can run a program to completion
// - SystemRunner: Concrete implementation using std::process::Command

use crate::error::{CoreError, CoreResult, command_start_error, command_wait_error};

use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

// ============================================================================
// PROCESS OUTPUT
// ============================================================================

/// Everything captured from one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Stdout decoded as UTF-8. Invalid bytes are an error, never replaced.
    pub fn stdout_utf8(&self, program: &str) -> CoreResult<String> {
        String::from_utf8(self.stdout.clone()).map_err(|source| CoreError::OutputDecode {
            program: program.to_string(),
            source,
        })
    }

    /// Stderr decoded lossily, for log lines and error messages only.
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

// ============================================================================
// RUNNER ABSTRACTION
// ============================================================================

/// Runs an external program to completion.
///
/// Implementations must not feed anything to the child's stdin and must not
/// return before the child has exited.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[OsString]) -> CoreResult<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, program: &str, args: &[OsString]) -> CoreResult<ProcessOutput> {
        (**self).run(program, args)
    }
}

/// Runs programs with `std::process::Command`, searching `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> CoreResult<ProcessOutput> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                log::error!("Failed to start {program}: {e}");
                command_start_error(program, e)
            })?;

        // wait_with_output drains both pipes, so a chatty child cannot block on a full pipe
        let output = child
            .wait_with_output()
            .map_err(|e| command_wait_error(program, e))?;

        log::trace!("{program} exited with {:?}", output.status.code());

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Renders a command line for log output.
pub fn format_command_line(program: &str, args: &[OsString]) -> String {
    std::iter::once(OsStr::new(program))
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
