// flactools-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser};
use flactools_core::config::{
    DEFAULT_FLAC, DEFAULT_LAME, DEFAULT_METAFLAC, DEFAULT_SOX, ENV_FLAC, ENV_LAME,
    ENV_LAME_OPTIONS, ENV_METAFLAC, ENV_SOX, ENV_TMPDIR,
};
use std::path::PathBuf;

// --- Options shared by every binary ---

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write log output to this file (a timestamped file when a directory is given)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// metaflac program
    #[arg(long, value_name = "PROGRAM", env = ENV_METAFLAC, default_value = DEFAULT_METAFLAC)]
    pub metaflac: String,

    /// flac program
    #[arg(long, value_name = "PROGRAM", env = ENV_FLAC, default_value = DEFAULT_FLAC)]
    pub flac: String,

    /// lame program
    #[arg(long, value_name = "PROGRAM", env = ENV_LAME, default_value = DEFAULT_LAME)]
    pub lame: String,

    /// sox program
    #[arg(long, value_name = "PROGRAM", env = ENV_SOX, default_value = DEFAULT_SOX)]
    pub sox: String,

    /// Directory for merged temporary audio (defaults to the system temp dir)
    #[arg(long, value_name = "DIR", env = ENV_TMPDIR)]
    pub temp_dir: Option<PathBuf>,
}

// --- flacted ---

#[derive(Parser, Debug)]
#[command(
    name = "flacted",
    author,
    version,
    about = "Show or edit a tag of a FLAC file",
    long_about = "Prints the value of TAG in FILE, or sets it when VALUE is given.\n\
                  Installed as flac-album, flac-artist, flac-genre, flac-title, flac-track \
                  or flac-year, the tag is taken from the program name."
)]
pub struct FlactedCli {
    /// Tag name (case-insensitive), e.g. ARTIST
    #[arg(value_name = "TAG")]
    pub tag: String,

    #[command(flatten)]
    pub edit: TagEditArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of a `flac-<tag>` personality.
#[derive(Parser, Debug)]
#[command(author, version, about = "Show or edit one tag of a FLAC file")]
pub struct PersonalityCli {
    #[command(flatten)]
    pub edit: TagEditArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TagEditArgs {
    /// FLAC file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// New value; the tag is only printed when omitted
    #[arg(value_name = "VALUE", conflicts_with = "delete")]
    pub value: Option<String>,

    /// Remove the tag
    #[arg(short, long)]
    pub delete: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

// --- flac2mp3 ---

#[derive(Parser, Debug)]
#[command(
    name = "flac2mp3",
    author,
    version,
    about = "Convert FLAC files to MP3",
    long_about = "Decodes each FLAC file with flac and encodes it with lame, \
                  copying the standard tags into ID3 tags."
)]
pub struct Flac2Mp3Cli {
    /// FLAC files, or directories whose top-level .flac files are converted
    #[arg(required = true, value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Output MP3 (only valid with a single input file)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// lame options placed before -S, e.g. "-b 320"
    #[arg(long, value_name = "OPTIONS", env = ENV_LAME_OPTIONS, allow_hyphen_values = true)]
    pub lame_options: Option<String>,

    /// Move each source into this directory after a successful conversion
    #[arg(long, value_name = "DIR")]
    pub move_to: Option<PathBuf>,

    /// Do not copy FLAC tags into the MP3
    #[arg(long)]
    pub no_tags: bool,

    /// Check that flac, lame and metaflac can be started, then exit
    #[arg(long)]
    pub check: bool,

    /// Continue with the remaining files after a failure
    #[arg(short, long)]
    pub keep_going: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

// --- flacs2mp3-cue ---

#[derive(Parser, Debug)]
#[command(
    name = "flacs2mp3-cue",
    author,
    version,
    about = "Merge FLAC files into one MP3 with a cue sheet",
    long_about = "Decodes the FLAC files, joins them in the given order with sox, encodes \
                  the result with lame and writes a cue sheet marking each track."
)]
pub struct CueCli {
    /// FLAC files in play order, or one directory of .flac files
    #[arg(required = true, value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Output MP3; the cue sheet is written beside it
    #[arg(short, long, required = true, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Album title for the cue sheet (defaults to the first file's ALBUM tag)
    #[arg(long, value_name = "TITLE")]
    pub album: Option<String>,

    /// Album performer for the cue sheet (defaults to the first file's ARTIST tag)
    #[arg(long, value_name = "NAME")]
    pub artist: Option<String>,

    /// lame options placed before -S, e.g. "-b 320"
    #[arg(long, value_name = "OPTIONS", env = ENV_LAME_OPTIONS, allow_hyphen_values = true)]
    pub lame_options: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flacted_read() {
        let cli = FlactedCli::try_parse_from(["flacted", "ARTIST", "song.flac"]).unwrap();
        assert_eq!(cli.tag, "ARTIST");
        assert_eq!(cli.edit.file, PathBuf::from("song.flac"));
        assert!(cli.edit.value.is_none());
        assert!(!cli.edit.delete);
    }

    #[test]
    fn test_parse_flacted_write_and_delete_conflict() {
        let cli = FlactedCli::try_parse_from(["flacted", "title", "song.flac", "Echoes"]).unwrap();
        assert_eq!(cli.edit.value.as_deref(), Some("Echoes"));

        let result = FlactedCli::try_parse_from(["flacted", "title", "song.flac", "x", "--delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_personality() {
        let cli = PersonalityCli::try_parse_from(["flac-year", "song.flac", "1973", "-v"]).unwrap();
        assert_eq!(cli.edit.value.as_deref(), Some("1973"));
        assert!(cli.common.verbose);
    }

    #[test]
    fn test_parse_flac2mp3() {
        let cli = Flac2Mp3Cli::try_parse_from([
            "flac2mp3",
            "a.flac",
            "b.flac",
            "--lame-options",
            "-b 320",
            "--move-to",
            "done",
            "-k",
        ])
        .unwrap();
        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.lame_options.as_deref(), Some("-b 320"));
        assert_eq!(cli.move_to, Some(PathBuf::from("done")));
        assert!(cli.keep_going);
    }

    #[test]
    fn test_parse_cue_requires_output() {
        assert!(CueCli::try_parse_from(["flacs2mp3-cue", "a.flac"]).is_err());
        let cli = CueCli::try_parse_from(["flacs2mp3-cue", "a.flac", "b.flac", "-o", "album.mp3"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("album.mp3"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(FlactedCli::try_parse_from(["flacted", "t", "f.flac", "-v", "-q"]).is_err());
    }
}
