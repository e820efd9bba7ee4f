//! FLAC to WAV decoding.
//!
//! Runs `flac -f -d <source>`, which writes `<stem>.wav` next to the source,
//! overwriting any existing file. Success is decided solely by whether that
//! WAV can be opened afterwards.

use crate::config::ToolConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{ProcessRunner, log_command, verify_output};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the uncompressed intermediate format.
pub const WAV_EXTENSION: &str = "wav";

/// The WAV path flac writes when decoding `source` in place.
pub fn wav_path_for(source: &Path) -> PathBuf {
    source.with_extension(WAV_EXTENSION)
}

/// Decodes `source` to its sibling WAV file and returns the WAV path.
///
/// When `destination` is given the source is renamed there, but only after
/// the WAV has been verified. A failed decode leaves the source untouched.
///
/// # Errors
///
/// * `CoreError::Verification` - the WAV could not be opened, whatever flac's exit code
/// * `CoreError::Relocate` - the WAV exists but moving the source failed
pub fn decode_flac<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    source: &Path,
    destination: Option<&Path>,
) -> CoreResult<PathBuf> {
    let args = vec![
        OsString::from("-f"),
        OsString::from("-d"),
        source.as_os_str().to_os_string(),
    ];
    log_command(log::Level::Info, &config.flac, &args);

    let output = runner.run(&config.flac, &args)?;
    if !output.success() {
        log::debug!("{} exited with {:?}: {}", config.flac, output.code, output.stderr_lossy());
    }

    let wav_path = wav_path_for(source);
    verify_output(&wav_path)?;

    if let Some(destination) = destination {
        log::info!("Moving {} to {}", source.display(), destination.display());
        fs::rename(source, destination).map_err(|e| CoreError::Relocate {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: e,
        })?;
    }

    Ok(wav_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_path_replaces_extension() {
        assert_eq!(wav_path_for(Path::new("song.flac")), PathBuf::from("song.wav"));
        assert_eq!(
            wav_path_for(Path::new("/music/01 - Intro.FLAC")),
            PathBuf::from("/music/01 - Intro.wav")
        );
        assert_eq!(wav_path_for(Path::new("noext")), PathBuf::from("noext.wav"));
        assert_eq!(wav_path_for(Path::new("a.b.flac")), PathBuf::from("a.b.wav"));
    }
}
