//! Stream properties of FLAC files, read through metaflac.
//!
//! `metaflac --show-sample-rate --show-total-samples <file>` prints one number
//! per line in the order the options are given. The durations are used to
//! place track markers in cue sheets.

use crate::config::ToolConfig;
use crate::error::{CoreError, CoreResult, command_failed_error};
use crate::external::{ProcessRunner, log_command};

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

/// Sample rate and length of one FLAC stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub sample_rate: u32,
    pub total_samples: u64,
}

impl StreamInfo {
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        let rate = u64::from(self.sample_rate);
        let secs = self.total_samples / rate;
        let nanos = (self.total_samples % rate) * 1_000_000_000 / rate;
        Duration::new(secs, nanos as u32)
    }
}

/// Parses the two-line output of the stream info query.
pub fn parse_stream_info(output: &str) -> CoreResult<StreamInfo> {
    let mut lines = output.lines().map(str::trim).filter(|l| !l.is_empty());

    let sample_rate = lines
        .next()
        .and_then(|l| l.parse::<u32>().ok())
        .ok_or_else(|| CoreError::OutputParse(format!("missing sample rate in {output:?}")))?;
    let total_samples = lines
        .next()
        .and_then(|l| l.parse::<u64>().ok())
        .ok_or_else(|| CoreError::OutputParse(format!("missing total samples in {output:?}")))?;

    Ok(StreamInfo {
        sample_rate,
        total_samples,
    })
}

/// Reads the sample rate and sample count of `file`.
pub fn read_stream_info<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    file: &Path,
) -> CoreResult<StreamInfo> {
    let args = vec![
        OsString::from("--show-sample-rate"),
        OsString::from("--show-total-samples"),
        file.as_os_str().to_os_string(),
    ];
    log_command(log::Level::Debug, &config.metaflac, &args);

    let output = runner.run(&config.metaflac, &args)?;
    if !output.success() {
        return Err(command_failed_error(
            &config.metaflac,
            output.code,
            output.stderr_lossy(),
        ));
    }

    parse_stream_info(&output.stdout_utf8(&config.metaflac)?)
}
