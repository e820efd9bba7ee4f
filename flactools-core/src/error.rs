// ============================================================================
// flactools-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for flactools-core
//
// This module defines the error taxonomy for the core library. Spawn failures,
// missing tags, failed artifact verification and undecodable tool output are
// all distinct variants so callers can react to each one explicitly.
//
// KEY COMPONENTS:
// - CoreError: Enum of every failure the core can surface
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper functions for the common process-related errors

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Custom error type for flactools-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- Process Errors ----
    /// The external program is not on the search path.
    #[error("Required external command not found: {0}")]
    DependencyNotFound(String),

    /// The external program exists but could not be started.
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    /// Waiting for the external program to finish failed.
    #[error("Failed to wait for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    /// The external program exited unsuccessfully and there is no output
    /// artifact that could be checked instead.
    #[error("Command '{program}' failed with exit code {code:?}: {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    // ---- Output Handling Errors ----
    /// Captured output was not valid UTF-8.
    #[error("Output of '{program}' is not valid UTF-8: {source}")]
    OutputDecode {
        program: String,
        #[source]
        source: FromUtf8Error,
    },

    /// Captured output did not have the expected shape.
    #[error("Could not parse tool output: {0}")]
    OutputParse(String),

    // ---- Metadata Errors ----
    /// The requested tag is absent from the file.
    #[error("Tag \"{tag}\" not found in {}", path.display())]
    TagNotFound { tag: String, path: PathBuf },

    // ---- Artifact Errors ----
    /// The artifact a tool was expected to produce cannot be opened.
    #[error("Expected output {} could not be opened: {source}", path.display())]
    Verification {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Moving the source file after a successful decode failed.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---- Input Errors ----
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No .flac files found in input directory")]
    NoFilesFound,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// True for the "tag absent" outcome, which callers usually treat as unset.
    pub fn is_tag_not_found(&self) -> bool {
        matches!(self, CoreError::TagNotFound { .. })
    }
}

/// Result type for flactools-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Maps a spawn failure, separating a missing binary from other start errors.
pub fn command_start_error(program: impl Into<String>, error: io::Error) -> CoreError {
    let program = program.into();
    if error.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(program)
    } else {
        CoreError::CommandStart(program, error)
    }
}

pub fn command_wait_error(program: impl Into<String>, error: io::Error) -> CoreError {
    CoreError::CommandWait(program.into(), error)
}

pub fn command_failed_error(
    program: impl Into<String>,
    code: Option<i32>,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        program: program.into(),
        code,
        stderr: stderr.into(),
    }
}
