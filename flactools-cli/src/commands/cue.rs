//! Implementation of flacs2mp3-cue.
//!
//! Merges the given FLAC files (or the .flac files of one directory) into a
//! single MP3 and writes a cue sheet beside it.

use crate::cli::CueCli;
use crate::commands::convert::expand_inputs;
use crate::error::CliResult;

use flactools_core::{
    AlbumRequest, AlbumResult, CoreError, LameOptions, ProcessRunner, ToolConfig,
    flacs_to_mp3_with_cue,
};

use log::info;

pub fn run_cue<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    args: &CueCli,
) -> CliResult<AlbumResult> {
    let sources = expand_inputs(&args.inputs)?;
    if sources.is_empty() {
        return Err(CoreError::NoFilesFound);
    }
    info!("Merging {} files into {}", sources.len(), args.output.display());

    let request = AlbumRequest {
        sources,
        output: args.output.clone(),
        lame_options: args.lame_options.as_deref().map(LameOptions::parse),
        album: args.album.clone(),
        performer: args.artist.clone(),
    };
    flacs_to_mp3_with_cue(runner, config, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use flactools_core::external::mocks::{MockResponse, MockRunner};

    #[test]
    fn test_cue_overrides_reach_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("live.mp3");
        let args = CueCli::try_parse_from([
            "flacs2mp3-cue",
            tmp.path().join("1.flac").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--album",
            "Live at Pompeii",
            "--artist",
            "Pink Floyd",
            "--lame-options",
            "-b 320",
        ])
        .unwrap();

        let config = ToolConfig {
            temp_dir: Some(tmp.path().join("scratch")),
            ..ToolConfig::default()
        };
        let runner = MockRunner::new();
        // Six tag queries, then stream info
        for _ in 0..6 {
            runner.push(MockResponse::success());
        }
        runner.push(MockResponse::success().with_stdout("48000\n480000\n"));
        runner.push(MockResponse::success().creating(tmp.path().join("1.wav")));
        runner.push(MockResponse::success().creating_last_arg());
        runner.push(MockResponse::success().creating_last_arg());

        let result = run_cue(&runner, &config, &args).unwrap();
        assert_eq!(result.cue_sheet.title.as_deref(), Some("Live at Pompeii"));
        assert_eq!(result.cue_sheet.performer.as_deref(), Some("Pink Floyd"));
        assert!(result.cue.exists());

        let lame = runner.calls().into_iter().find(|c| c.program == "lame").unwrap();
        assert_eq!(lame.args_lossy()[..3], ["-b", "320", "-S"]);
    }
}
