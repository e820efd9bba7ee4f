// flactools-cli/src/config.rs
//
// Turns parsed command-line options into the core ToolConfig.

use crate::cli::CommonArgs;
use crate::error::CliResult;
use flactools_core::{LameOptions, ToolConfig};

/// Builds the core configuration. Environment fallbacks were already applied
/// by clap, so only the parsed arguments are consulted here.
pub fn tool_config(common: &CommonArgs, lame_options: Option<&str>) -> CliResult<ToolConfig> {
    let mut config = ToolConfig {
        metaflac: common.metaflac.clone(),
        flac: common.flac.clone(),
        lame: common.lame.clone(),
        sox: common.sox.clone(),
        temp_dir: common.temp_dir.clone(),
        ..ToolConfig::default()
    };
    if let Some(options) = lame_options {
        config.lame_options = LameOptions::parse(options);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Flac2Mp3Cli;
    use clap::Parser;

    #[test]
    fn test_tool_config_from_args() {
        let cli = Flac2Mp3Cli::try_parse_from([
            "flac2mp3",
            "a.flac",
            "--lame",
            "/opt/lame",
            "--temp-dir",
            "/scratch",
        ])
        .unwrap();
        let config = tool_config(&cli.common, Some("-b 256")).unwrap();
        assert_eq!(config.lame, "/opt/lame");
        assert_eq!(config.temp_dir, Some("/scratch".into()));
        assert_eq!(config.lame_options.args(), ["-b", "256"]);
    }

    #[test]
    fn test_tool_config_rejects_empty_program() {
        let mut cli = Flac2Mp3Cli::try_parse_from(["flac2mp3", "a.flac"]).unwrap();
        cli.common.sox = String::new();
        assert!(tool_config(&cli.common, None).is_err());
    }
}
