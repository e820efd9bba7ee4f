//! Audio concatenation with sox.
//!
//! `sox <input1> <input2> ... <output>` joins the inputs in argument order
//! into a freshly allocated temporary WAV. The returned path belongs to the
//! caller from then on.

use crate::config::ToolConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{ProcessRunner, log_command, verify_output};
use crate::temp_files::{self, MERGE_PREFIX, MERGE_SUFFIX};

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Concatenates `files` in order and returns the path of the merged WAV.
///
/// The temporary file is created up front to reserve a unique name, so an
/// empty file after sox returns means nothing was written and counts as a
/// failed verification. On failure the placeholder is removed.
pub fn merge_audio<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    files: &[PathBuf],
) -> CoreResult<PathBuf> {
    if files.is_empty() {
        return Err(CoreError::InvalidInput(
            "at least one file is required to merge".to_string(),
        ));
    }

    let output = temp_files::create_persistent_temp_file(
        config.temp_dir.as_deref(),
        MERGE_PREFIX,
        MERGE_SUFFIX,
    )?;

    match run_sox(runner, config, files, &output) {
        Ok(()) => Ok(output),
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&output) {
                log::warn!("Could not remove {}: {cleanup}", output.display());
            }
            Err(e)
        }
    }
}

fn run_sox<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    files: &[PathBuf],
    output: &Path,
) -> CoreResult<()> {
    let args: Vec<OsString> = files
        .iter()
        .map(|f| f.as_os_str().to_os_string())
        .chain(std::iter::once(output.as_os_str().to_os_string()))
        .collect();
    log_command(log::Level::Info, &config.sox, &args);

    let result = runner.run(&config.sox, &args)?;
    if !result.success() {
        log::debug!("{} exited with {:?}: {}", config.sox, result.code, result.stderr_lossy());
    }

    verify_output(output)?;
    if fs::metadata(output)?.len() == 0 {
        return Err(CoreError::Verification {
            path: output.to_path_buf(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "merged output is empty"),
        });
    }
    Ok(())
}
