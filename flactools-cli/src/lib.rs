// flactools-cli/src/lib.rs
//
// Library portion of the flactools binaries.
// Contains argument definitions, logging setup and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;

// Re-export items needed by the binaries or integration tests
pub use cli::{CommonArgs, CueCli, Flac2Mp3Cli, FlactedCli, PersonalityCli, TagEditArgs};
pub use commands::convert::{ConvertSummary, run_check, run_convert};
pub use commands::cue::run_cue;
pub use commands::tag::{TagOutcome, format_outcome, run_tag};
pub use error::{CliResult, exit_code, report_error};

/// The name this process was started as, without directories.
pub fn program_name(default: &str) -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| default.to_string())
}
