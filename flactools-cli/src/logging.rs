// ============================================================================
// flactools-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Configuration for the flactools Binaries
//
// The core library only emits through the `log` facade. Each binary installs
// the backend once, at startup, with the level and sink chosen on the
// command line:
// - default: warnings and errors
// - -v/--verbose: debug
// - -q/--quiet: errors only
// - RUST_LOG, when set, refines the filter further
// - --log-file: output goes to a file instead of stderr

use crate::cli::CommonArgs;

use log::LevelFilter;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// The level implied by the verbosity flags.
pub fn level_for(common: &CommonArgs) -> LevelFilter {
    if common.verbose {
        LevelFilter::Debug
    } else if common.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    }
}

/// Resolves `--log-file`: a directory gets a timestamped file inside it.
pub fn log_file_path(requested: &Path, program: &str) -> PathBuf {
    if requested.is_dir() {
        requested.join(format!("{program}_{}.log", get_timestamp()))
    } else {
        requested.to_path_buf()
    }
}

/// Installs the global logger. Call once, before any core operation.
pub fn init_logging(program: &str, common: &CommonArgs) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(common))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        });

    if let Some(requested) = &common.log_file {
        let path = log_file_path(requested, program);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger installed earlier (e.g. by a test harness) is left in place
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}
