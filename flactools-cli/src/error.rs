// ============================================================================
// flactools-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// This module provides error handling utilities for the CLI that integrate
// with the flactools-core error types: a result alias, exit code mapping and
// error reporting on stderr.

// ---- Internal crate imports ----
use flactools_core::{CoreError, CoreResult};

// ---- External crate imports ----
use console::style;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// EXIT CODES
// ============================================================================

pub const EXIT_SUCCESS: i32 = 0;

/// The requested tag does not exist.
pub const EXIT_TAG_NOT_FOUND: i32 = 1;

/// Any other failure.
pub const EXIT_FAILURE: i32 = 2;

/// Maps an error to the process exit code.
pub fn exit_code(error: &CoreError) -> i32 {
    if error.is_tag_not_found() {
        EXIT_TAG_NOT_FOUND
    } else {
        EXIT_FAILURE
    }
}

/// Prints `error` to stderr and returns its exit code.
pub fn report_error(program: &str, error: &CoreError) -> i32 {
    log::debug!("{error:?}");
    eprintln!(
        "{}: {}",
        style(program).bold().for_stderr(),
        style(error).red().for_stderr()
    );
    exit_code(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let missing = CoreError::TagNotFound {
            tag: "title".to_string(),
            path: PathBuf::from("a.flac"),
        };
        assert_eq!(exit_code(&missing), EXIT_TAG_NOT_FOUND);
        assert_eq!(exit_code(&CoreError::DependencyNotFound("lame".into())), EXIT_FAILURE);
    }
}
