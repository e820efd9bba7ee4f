// flactools-cli/src/bin/flacs2mp3_cue.rs
//
// Merges several FLAC files into a single MP3 with a cue sheet.

use clap::Parser;
use flactools_cli::error::EXIT_SUCCESS;
use flactools_cli::{CueCli, config, logging, report_error, run_cue};
use flactools_core::SystemRunner;
use std::process;

fn main() {
    let program = "flacs2mp3-cue";
    let args = CueCli::parse();

    if let Err(e) = logging::init_logging(program, &args.common) {
        eprintln!("{program}: cannot open log file: {e}");
    }

    let code = match config::tool_config(&args.common, args.lame_options.as_deref())
        .and_then(|config| run_cue(&SystemRunner::new(), &config, &args))
    {
        Ok(result) => {
            if !args.common.quiet {
                println!("{}", result.mp3.display());
                println!("{}", result.cue.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(program, &e),
    };
    process::exit(code);
}
