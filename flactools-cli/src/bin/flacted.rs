// flactools-cli/src/bin/flacted.rs
//
// Tag editor. Started as flac-album, flac-artist, flac-genre, flac-title,
// flac-track or flac-year, the tag comes from the program name and only
// FILE [VALUE] are expected.

use clap::Parser;
use flactools_cli::error::EXIT_SUCCESS;
use flactools_cli::{
    CommonArgs, FlactedCli, PersonalityCli, TagEditArgs, config, format_outcome, logging,
    program_name, report_error, run_tag,
};
use flactools_core::{StandardTag, SystemRunner};
use std::process;

fn main() {
    let program = program_name("flacted");

    let (tag, edit, common): (String, TagEditArgs, CommonArgs) =
        match StandardTag::from_program_name(&program) {
            Some(standard) => {
                let cli = PersonalityCli::parse();
                (standard.field_name().to_string(), cli.edit, cli.common)
            }
            None => {
                let cli = FlactedCli::parse();
                (cli.tag, cli.edit, cli.common)
            }
        };

    if let Err(e) = logging::init_logging(&program, &common) {
        eprintln!("{program}: cannot open log file: {e}");
    }

    let code = match config::tool_config(&common, None)
        .and_then(|config| run_tag(&SystemRunner::new(), &config, &tag, &edit))
    {
        Ok(outcome) => {
            if let Some(line) = format_outcome(&tag, &edit, &outcome) {
                println!("{line}");
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(&program, &e),
    };
    process::exit(code);
}
