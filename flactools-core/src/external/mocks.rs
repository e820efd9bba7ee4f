// flactools-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::process_executor::{ProcessOutput, ProcessRunner};
use crate::error::{CoreError, CoreResult};

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// One invocation seen by `MockRunner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<OsString>,
}

impl RecordedCall {
    /// Arguments as strings, for easy assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Scripted result for the next call.
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    output: ProcessOutput,
    creates: Vec<PathBuf>,
    creates_last_arg: bool,
    not_found: bool,
}

impl MockResponse {
    /// Exit code 0 with no output.
    pub fn success() -> Self {
        Self {
            output: ProcessOutput {
                code: Some(0),
                ..ProcessOutput::default()
            },
            ..Self::default()
        }
    }

    /// Non-zero exit with the given stderr.
    pub fn failure(code: i32, stderr: &str) -> Self {
        Self {
            output: ProcessOutput {
                code: Some(code),
                stderr: stderr.as_bytes().to_vec(),
                ..ProcessOutput::default()
            },
            ..Self::default()
        }
    }

    /// Simulates a program missing from `PATH`.
    pub fn not_found() -> Self {
        Self {
            not_found: true,
            ..Self::default()
        }
    }

    pub fn with_stdout(mut self, stdout: impl AsRef<[u8]>) -> Self {
        self.output.stdout = stdout.as_ref().to_vec();
        self
    }

    pub fn with_stderr(mut self, stderr: impl AsRef<[u8]>) -> Self {
        self.output.stderr = stderr.as_ref().to_vec();
        self
    }

    /// Creates `path` as if the program had written it.
    pub fn creating(mut self, path: impl Into<PathBuf>) -> Self {
        self.creates.push(path.into());
        self
    }

    /// Creates whatever path is passed as the final argument.
    pub fn creating_last_arg(mut self) -> Self {
        self.creates_last_arg = true;
        self
    }
}

/// A `ProcessRunner` that records calls and replays scripted responses.
///
/// When no response is queued the call succeeds with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next unanswered call.
    pub fn push(&self, response: MockResponse) -> &Self {
        self.responses
            .lock()
            .expect("mock responses poisoned")
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock calls poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock calls poisoned").len()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, program: &str, args: &[OsString]) -> CoreResult<ProcessOutput> {
        self.calls
            .lock()
            .expect("mock calls poisoned")
            .push(RecordedCall {
                program: program.to_string(),
                args: args.to_vec(),
            });

        let response = self
            .responses
            .lock()
            .expect("mock responses poisoned")
            .pop_front()
            .unwrap_or_else(MockResponse::success);

        if response.not_found {
            return Err(CoreError::DependencyNotFound(program.to_string()));
        }

        let mut to_create = response.creates.clone();
        if response.creates_last_arg {
            if let Some(last) = args.last() {
                to_create.push(PathBuf::from(last));
            }
        }
        for path in to_create {
            fs::write(&path, b"mock audio")?;
        }

        Ok(response.output)
    }
}
