// flactools-cli/src/bin/flac2mp3.rs
//
// Converts FLAC files to MP3, one output per input.

use clap::Parser;
use flactools_cli::error::{EXIT_FAILURE, EXIT_SUCCESS};
use flactools_cli::progress::BatchProgress;
use flactools_cli::{Flac2Mp3Cli, config, logging, report_error, run_check, run_convert};
use flactools_core::SystemRunner;
use std::process;

fn main() {
    let program = "flac2mp3";
    let args = Flac2Mp3Cli::parse();

    if let Err(e) = logging::init_logging(program, &args.common) {
        eprintln!("{program}: cannot open log file: {e}");
    }

    let config = match config::tool_config(&args.common, args.lame_options.as_deref()) {
        Ok(config) => config,
        Err(e) => process::exit(report_error(program, &e)),
    };
    let runner = SystemRunner::new();

    if args.check {
        let code = match run_check(&runner, &config) {
            Ok(found) => {
                for name in found {
                    println!("ok: {name}");
                }
                EXIT_SUCCESS
            }
            Err(e) => report_error(program, &e),
        };
        process::exit(code);
    }

    let progress = BatchProgress::new(args.inputs.len(), args.common.quiet);
    let code = match run_convert(&runner, &config, &args, &progress) {
        Ok(summary) if summary.is_success() => EXIT_SUCCESS,
        Ok(summary) => {
            for (source, e) in &summary.failed {
                eprintln!("{program}: {}: {e}", source.display());
            }
            eprintln!(
                "{program}: {} converted, {} failed",
                summary.converted.len(),
                summary.failed.len()
            );
            EXIT_FAILURE
        }
        Err(e) => report_error(program, &e),
    };
    process::exit(code);
}
