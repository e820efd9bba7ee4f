//! WAV to MP3 encoding with lame.
//!
//! The command line is `lame <options...> -S [id3 args...] <input> <output>`.
//! `-S` keeps lame from drawing its progress display. Stderr is only logged;
//! the output file is what decides success.

use crate::config::{LameOptions, ToolConfig};
use crate::error::CoreResult;
use crate::external::{ProcessRunner, log_command, verify_output};
use crate::tags::TrackMetadata;

use std::ffi::OsString;
use std::path::Path;

/// Encodes `wav` to `output` using `options`.
pub fn encode_wav_to_mp3<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    wav: &Path,
    output: &Path,
    options: &LameOptions,
) -> CoreResult<()> {
    run_lame(runner, config, wav, output, options, Vec::new())
}

/// Like `encode_wav_to_mp3`, additionally writing ID3 tags from `metadata`.
pub fn encode_wav_to_mp3_tagged<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    wav: &Path,
    output: &Path,
    options: &LameOptions,
    metadata: &TrackMetadata,
) -> CoreResult<()> {
    run_lame(runner, config, wav, output, options, id3_args(metadata))
}

/// Builds lame's ID3 arguments. Absent or empty tags are skipped.
pub fn id3_args(metadata: &TrackMetadata) -> Vec<OsString> {
    let year = metadata.year.as_deref().map(leading_year);

    let fields = [
        ("--tt", metadata.title.as_deref()),
        ("--ta", metadata.artist.as_deref()),
        ("--tl", metadata.album.as_deref()),
        ("--ty", year),
        ("--tn", metadata.track.as_deref()),
        ("--tg", metadata.genre.as_deref()),
    ];

    let mut args: Vec<OsString> = fields
        .into_iter()
        .filter_map(|(flag, value)| value.filter(|v| !v.is_empty()).map(|v| (flag, v)))
        .flat_map(|(flag, value)| [OsString::from(flag), OsString::from(value)])
        .collect();

    if !args.is_empty() {
        args.push(OsString::from("--add-id3v2"));
    }
    args
}

// lame only accepts a numeric year; FLAC dates are often full ISO dates
fn leading_year(date: &str) -> &str {
    let end = date
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(date.len(), |(i, _)| i);
    &date[..end]
}

fn run_lame<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    wav: &Path,
    output: &Path,
    options: &LameOptions,
    id3: Vec<OsString>,
) -> CoreResult<()> {
    let mut args: Vec<OsString> = options.args().iter().map(OsString::from).collect();
    args.push(OsString::from("-S"));
    args.extend(id3);
    args.push(wav.as_os_str().to_os_string());
    args.push(output.as_os_str().to_os_string());

    log_command(log::Level::Info, &config.lame, &args);

    let result = runner.run(&config.lame, &args)?;
    log::debug!("{}", result.stderr_lossy());

    verify_output(output)?;

    log::info!("Finished encoding to MP3");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn id3_args_skip_missing_and_empty() {
        let metadata = TrackMetadata {
            title: Some("Time".to_string()),
            artist: Some("Pink Floyd".to_string()),
            album: Some(String::new()),
            year: Some("1973-03-01".to_string()),
            ..TrackMetadata::default()
        };
        assert_eq!(
            strings(&id3_args(&metadata)),
            ["--tt", "Time", "--ta", "Pink Floyd", "--ty", "1973", "--add-id3v2"]
        );
    }

    #[test]
    fn id3_args_empty_without_metadata() {
        assert!(id3_args(&TrackMetadata::default()).is_empty());
    }

    #[test]
    fn leading_year_strips_rest_of_date() {
        assert_eq!(leading_year("1973"), "1973");
        assert_eq!(leading_year("1973-03-01"), "1973");
        assert_eq!(leading_year("c. 1970"), "");
    }
}
