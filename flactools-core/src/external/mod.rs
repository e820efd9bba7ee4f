// ============================================================================
// flactools-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools and File System
//
// This module encapsulates interactions with the external audio tools
// (metaflac, flac, lame, sox) and the file system checks that decide whether
// an invocation succeeded. Everything goes through the ProcessRunner trait so
// consumers and tests can inject their own implementation.
//
// KEY COMPONENTS:
// - ProcessRunner trait and the SystemRunner implementation
// - MockRunner for tests
// - Dependency checking
// - Output artifact verification

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::fs::File;
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for running external programs
pub mod process_executor;

/// Recording/replaying runner used by the test suites
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use process_executor::{ProcessOutput, ProcessRunner, SystemRunner, format_command_line};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that a required external command can be started.
///
/// The program is run with `--version`; only a failure to start it counts,
/// the exit code is ignored.
///
/// # Returns
///
/// * `Ok(())` - The program started
/// * `Err(CoreError::DependencyNotFound)` - The program is not on the search path
/// * `Err(CoreError::CommandStart)` - The program exists but failed to start
pub fn check_dependency<R: ProcessRunner>(runner: &R, program: &str) -> CoreResult<()> {
    match runner.run(program, &[OsString::from("--version")]) {
        Ok(_) => {
            log::debug!("Found dependency: {program}");
            Ok(())
        }
        Err(e) => {
            log::warn!("Dependency check for '{program}' failed: {e}");
            Err(e)
        }
    }
}

// ============================================================================
// OUTPUT VERIFICATION
// ============================================================================

/// Confirms that an expected output artifact exists by opening it for reading.
///
/// This check is the sole success signal for artifact-producing operations;
/// the tool's own exit code is not consulted. The handle is dropped before
/// returning.
pub fn verify_output(path: &Path) -> CoreResult<()> {
    File::open(path).map(drop).map_err(|source| {
        log::error!("Expected output {} is missing: {source}", path.display());
        CoreError::Verification {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Logs a command line before it is run.
pub(crate) fn log_command(level: log::Level, program: &str, args: &[OsString]) {
    log::log!(level, "{}", format_command_line(program, args));
}
