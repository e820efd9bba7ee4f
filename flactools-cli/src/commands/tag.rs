//! Implementation of flacted and its flac-<tag> personalities.
//!
//! Reads, sets or removes a single tag. Reading prints the value on stdout
//! (or a JSON object with `--json`); a missing tag is reported as an error
//! so the caller can tell it apart from an empty value.

use crate::cli::TagEditArgs;
use crate::error::CliResult;

use flactools_core::{ProcessRunner, ToolConfig, read_tag, remove_tag, write_tag};

use log::info;
use serde_json::json;

/// What a tag command did, for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    Read(String),
    Written(String),
    Removed,
}

/// Performs the read/write/delete requested in `args` on tag `tag`.
pub fn run_tag<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    tag: &str,
    args: &TagEditArgs,
) -> CliResult<TagOutcome> {
    if args.delete {
        remove_tag(runner, config, &args.file, tag)?;
        info!("Removed {tag} from {}", args.file.display());
        return Ok(TagOutcome::Removed);
    }

    match &args.value {
        Some(value) => {
            write_tag(runner, config, &args.file, tag, value)?;
            info!("Set {tag} of {} to {value:?}", args.file.display());
            Ok(TagOutcome::Written(value.clone()))
        }
        None => read_tag(runner, config, &args.file, tag).map(TagOutcome::Read),
    }
}

/// Renders the outcome as it is printed on stdout. Writes and deletes print
/// nothing unless JSON output was requested.
pub fn format_outcome(tag: &str, args: &TagEditArgs, outcome: &TagOutcome) -> Option<String> {
    if args.json {
        let value = match outcome {
            TagOutcome::Read(v) | TagOutcome::Written(v) => json!(v),
            TagOutcome::Removed => serde_json::Value::Null,
        };
        let object = json!({
            "file": args.file.to_string_lossy(),
            "tag": tag.to_lowercase(),
            "value": value,
        });
        return Some(object.to_string());
    }

    match outcome {
        TagOutcome::Read(value) => Some(value.clone()),
        TagOutcome::Written(_) | TagOutcome::Removed => None,
    }
}
