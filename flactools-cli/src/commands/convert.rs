//! Implementation of flac2mp3.
//!
//! Expands the inputs into a list of FLAC files, then converts them one at a
//! time with `flactools_core::flac_to_mp3`. With `--keep-going` a failure is
//! recorded and the batch continues; otherwise the first error stops it.

use crate::cli::Flac2Mp3Cli;
use crate::error::CliResult;
use crate::progress::BatchProgress;

use flactools_core::{
    CoreError, LameOptions, Mp3Request, ProcessRunner, ToolConfig, check_dependency, find_flac_files,
    flac_to_mp3,
};

use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a flac2mp3 run.
#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, CoreError)>,
}

impl ConvertSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Expands directories into their top-level .flac files, keeping argument order.
pub fn expand_inputs(inputs: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(find_flac_files(input)?);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Starts each program flac2mp3 needs and reports the first one missing.
pub fn run_check<R: ProcessRunner>(runner: &R, config: &ToolConfig) -> CliResult<Vec<String>> {
    let mut found = Vec::new();
    for program in [&config.metaflac, &config.flac, &config.lame] {
        check_dependency(runner, program)?;
        found.push(program.clone());
    }
    Ok(found)
}

/// Converts every input. Errors before the first conversion (bad arguments,
/// unreadable directories) are returned; conversion errors are returned or
/// collected depending on `--keep-going`.
pub fn run_convert<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    args: &Flac2Mp3Cli,
    progress: &BatchProgress,
) -> CliResult<ConvertSummary> {
    let files = expand_inputs(&args.inputs)?;
    if args.output.is_some() && files.len() != 1 {
        return Err(CoreError::InvalidInput(format!(
            "--output needs exactly one input file, got {}",
            files.len()
        )));
    }
    if let Some(dir) = &args.move_to {
        fs::create_dir_all(dir)?;
    }
    let lame_options = args.lame_options.as_deref().map(LameOptions::parse);

    let mut summary = ConvertSummary::default();
    for source in files {
        progress.start_item(&display_name(&source));

        let request = Mp3Request {
            output: args.output.clone(),
            lame_options: lame_options.clone(),
            move_source_to: args
                .move_to
                .as_deref()
                .and_then(|dir| source.file_name().map(|name| dir.join(name))),
            copy_tags: !args.no_tags,
            source: source.clone(),
        };

        match flac_to_mp3(runner, config, &request) {
            Ok(mp3) => {
                info!("{} -> {}", source.display(), mp3.display());
                if !args.common.quiet {
                    progress.println(&mp3.display().to_string());
                }
                summary.converted.push(mp3);
            }
            Err(e) if args.keep_going => {
                error!("Failed to convert {}: {e}", source.display());
                summary.failed.push((source, e));
            }
            Err(e) => {
                progress.finish();
                return Err(e);
            }
        }
        progress.finish_item();
    }
    progress.finish();

    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
