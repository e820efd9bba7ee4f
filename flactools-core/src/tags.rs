// ============================================================================
// flactools-core/src/tags.rs
// ============================================================================
//
// TAGS: Reading and Writing FLAC Vorbis Comments via metaflac
//
// This module queries and edits single named tags. Reading runs
// `metaflac --show-tag=<tag> <file>` and parses the `<tag>=<value>` line out
// of its output. The parsing half is a pure function so it can be tested
// without spawning anything.
//
// KEY COMPONENTS:
// - parse_tag_output: Pure parser for metaflac's key=value output
// - read_tag / read_tag_opt: Query a single tag
// - write_tag / remove_tag: Edit a single tag
// - StandardTag: The six tag categories the CLI personalities expose
// - TrackMetadata: All standard tags of one file, each optional

// ---- Internal crate imports ----
use crate::config::ToolConfig;
use crate::error::{CoreError, CoreResult, command_failed_error};
use crate::external::{ProcessRunner, log_command};

// ---- External crate imports ----
use serde::{Deserialize, Serialize};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// OUTPUT PARSING
// ============================================================================

/// Extracts the value of `tag` from metaflac `--show-tag` output.
///
/// The output is trimmed, then `<tag>=` must match case-insensitively at its
/// very start. Everything after the separator up to the first line break is
/// the value, so multi-line values keep only their first line. A bare
/// `<tag>=` yields `Some("")`; no match yields `None`.
///
/// # Examples
///
/// ```rust
/// use flactools_core::tags::parse_tag_output;
///
/// assert_eq!(parse_tag_output("ARTIST=Pink Floyd\n", "artist"), Some("Pink Floyd".to_string()));
/// assert_eq!(parse_tag_output("artist=", "artist"), Some(String::new()));
/// assert_eq!(parse_tag_output("", "title"), None);
/// ```
pub fn parse_tag_output(output: &str, tag: &str) -> Option<String> {
    let pattern = format!("{}=", tag.to_lowercase());
    let output = output.trim();

    let prefix = output.get(..pattern.len())?;
    if prefix.to_lowercase() != pattern {
        return None;
    }

    let value = output[pattern.len()..]
        .split(is_line_boundary)
        .next()
        .unwrap_or_default();

    Some(value.to_string())
}

// Every character that starts a new line in Unicode text, not just \n and \r
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// ============================================================================
// READING
// ============================================================================

/// Reads a single tag from a FLAC file.
///
/// The tag name is case-insensitive; the returned value's casing is kept.
///
/// # Returns
///
/// * `Ok(String)` - The first line of the value, possibly empty
/// * `Err(CoreError::TagNotFound)` - The file has no such tag
/// * `Err(CoreError::OutputDecode)` - metaflac printed non-UTF-8 output
/// * `Err(CoreError::DependencyNotFound)` - metaflac is not installed
pub fn read_tag<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    file: &Path,
    tag: &str,
) -> CoreResult<String> {
    let tag = tag.to_lowercase();
    let args = vec![
        OsString::from(format!("--show-tag={tag}")),
        file.as_os_str().to_os_string(),
    ];
    log_command(log::Level::Debug, &config.metaflac, &args);

    let output = runner.run(&config.metaflac, &args)?;
    let stdout = output.stdout_utf8(&config.metaflac)?;

    log::debug!("Looking for {tag}= in metaflac output");

    parse_tag_output(&stdout, &tag).ok_or_else(|| CoreError::TagNotFound {
        tag,
        path: file.to_path_buf(),
    })
}

/// Like `read_tag`, but a missing tag is `Ok(None)`.
pub fn read_tag_opt<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    file: &Path,
    tag: &str,
) -> CoreResult<Option<String>> {
    match read_tag(runner, config, file, tag) {
        Ok(value) => Ok(Some(value)),
        Err(CoreError::TagNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

// ============================================================================
// WRITING
// ============================================================================

/// Replaces every value of `tag` with `value`.
///
/// Tag edits produce no new artifact, so metaflac's exit status decides
/// success here.
pub fn write_tag<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    file: &Path,
    tag: &str,
    value: &str,
) -> CoreResult<()> {
    let tag = tag.to_lowercase();
    let args = vec![
        OsString::from(format!("--remove-tag={tag}")),
        OsString::from(format!("--set-tag={tag}={value}")),
        file.as_os_str().to_os_string(),
    ];
    run_edit(runner, config, &args)
}

/// Removes every value of `tag`. Removing an absent tag is not an error.
pub fn remove_tag<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    file: &Path,
    tag: &str,
) -> CoreResult<()> {
    let args = vec![
        OsString::from(format!("--remove-tag={}", tag.to_lowercase())),
        file.as_os_str().to_os_string(),
    ];
    run_edit(runner, config, &args)
}

fn run_edit<R: ProcessRunner>(runner: &R, config: &ToolConfig, args: &[OsString]) -> CoreResult<()> {
    log_command(log::Level::Info, &config.metaflac, args);

    let output = runner.run(&config.metaflac, args)?;
    if !output.success() {
        return Err(command_failed_error(
            &config.metaflac,
            output.code,
            output.stderr_lossy(),
        ));
    }
    Ok(())
}

// ============================================================================
// STANDARD TAGS
// ============================================================================

/// Tag categories exposed as separate command personalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardTag {
    Album,
    Artist,
    Genre,
    Title,
    Track,
    Year,
}

impl StandardTag {
    pub const ALL: [StandardTag; 6] = [
        StandardTag::Album,
        StandardTag::Artist,
        StandardTag::Genre,
        StandardTag::Title,
        StandardTag::Track,
        StandardTag::Year,
    ];

    /// The Vorbis comment field this category is stored in.
    pub fn field_name(self) -> &'static str {
        match self {
            StandardTag::Album => "album",
            StandardTag::Artist => "artist",
            StandardTag::Genre => "genre",
            StandardTag::Title => "title",
            StandardTag::Track => "tracknumber",
            StandardTag::Year => "date",
        }
    }

    /// Short name used in program names (`flac-<short>`).
    pub fn short_name(self) -> &'static str {
        match self {
            StandardTag::Album => "album",
            StandardTag::Artist => "artist",
            StandardTag::Genre => "genre",
            StandardTag::Title => "title",
            StandardTag::Track => "track",
            StandardTag::Year => "year",
        }
    }

    /// Resolves a personality from a program name such as `flac-artist`
    /// or `/usr/bin/flac-year`.
    pub fn from_program_name(name: &str) -> Option<Self> {
        let base = Path::new(name).file_stem()?.to_str()?;
        let short = base.strip_prefix("flac-")?;
        short.parse().ok()
    }
}

impl fmt::Display for StandardTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for StandardTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        StandardTag::ALL
            .into_iter()
            .find(|t| t.short_name() == lower || t.field_name() == lower)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown tag category '{s}'")))
    }
}

// ============================================================================
// TRACK METADATA
// ============================================================================

/// The standard tags of one file. Absent tags are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub album: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub title: Option<String>,
    pub track: Option<String>,
    pub year: Option<String>,
}

impl TrackMetadata {
    pub fn get(&self, tag: StandardTag) -> Option<&str> {
        match tag {
            StandardTag::Album => self.album.as_deref(),
            StandardTag::Artist => self.artist.as_deref(),
            StandardTag::Genre => self.genre.as_deref(),
            StandardTag::Title => self.title.as_deref(),
            StandardTag::Track => self.track.as_deref(),
            StandardTag::Year => self.year.as_deref(),
        }
    }

    fn slot(&mut self, tag: StandardTag) -> &mut Option<String> {
        match tag {
            StandardTag::Album => &mut self.album,
            StandardTag::Artist => &mut self.artist,
            StandardTag::Genre => &mut self.genre,
            StandardTag::Title => &mut self.title,
            StandardTag::Track => &mut self.track,
            StandardTag::Year => &mut self.year,
        }
    }
}

/// Reads all standard tags of `file`, one metaflac call per tag.
pub fn read_track_metadata<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    file: &Path,
) -> CoreResult<TrackMetadata> {
    let mut metadata = TrackMetadata::default();
    for tag in StandardTag::ALL {
        *metadata.slot(tag) = read_tag_opt(runner, config, file, tag.field_name())?;
    }
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_value() {
        assert_eq!(
            parse_tag_output("artist=Pink Floyd", "artist"),
            Some("Pink Floyd".to_string())
        );
    }

    #[test]
    fn parse_is_case_insensitive_on_name_only() {
        assert_eq!(
            parse_tag_output("ARTIST=Pink Floyd", "Artist"),
            Some("Pink Floyd".to_string())
        );
        assert_eq!(
            parse_tag_output("artist=PINK floyd", "ARTIST"),
            Some("PINK floyd".to_string())
        );
    }

    #[test]
    fn parse_keeps_first_line_only() {
        assert_eq!(
            parse_tag_output("artist=Line One\nLine Two", "artist"),
            Some("Line One".to_string())
        );
        assert_eq!(
            parse_tag_output("artist=Line One\r\nLine Two\r\n", "artist"),
            Some("Line One".to_string())
        );
    }

    #[test]
    fn parse_stops_at_unicode_line_breaks() {
        for sep in ['\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}'] {
            let output = format!("artist=A{sep}B");
            assert_eq!(parse_tag_output(&output, "artist"), Some("A".to_string()), "{sep:?}");
        }
        // Other control characters stay in the value
        assert_eq!(parse_tag_output("artist=A\tB", "artist"), Some("A\tB".to_string()));
    }

    #[test]
    fn metadata_serializes_with_field_names() {
        let metadata = TrackMetadata {
            artist: Some("Pink Floyd".to_string()),
            track: Some("3".to_string()),
            ..TrackMetadata::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["artist"], "Pink Floyd");
        assert_eq!(json["track"], "3");
        assert!(json["album"].is_null());

        let back: TrackMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn standard_tag_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StandardTag::Year).unwrap(), "\"year\"");
        let tag: StandardTag = serde_json::from_str("\"track\"").unwrap();
        assert_eq!(tag, StandardTag::Track);
    }

    #[test]
    fn parse_empty_value_is_not_missing() {
        assert_eq!(parse_tag_output("artist=", "artist"), Some(String::new()));
        assert_eq!(parse_tag_output("artist=\n", "artist"), Some(String::new()));
    }

    #[test]
    fn parse_missing_tag() {
        assert_eq!(parse_tag_output("", "title"), None);
        assert_eq!(parse_tag_output("artist=Someone", "title"), None);
        // Must match at the start of the output
        assert_eq!(parse_tag_output("subtitle=Live", "title"), None);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(
            parse_tag_output("\n  title=Echoes  \n", "title"),
            Some("Echoes".to_string())
        );
    }

    #[test]
    fn parse_keeps_later_separators_in_value() {
        assert_eq!(
            parse_tag_output("comment=a=b", "comment"),
            Some("a=b".to_string())
        );
    }

    #[test]
    fn standard_tag_from_program_name() {
        assert_eq!(StandardTag::from_program_name("flac-artist"), Some(StandardTag::Artist));
        assert_eq!(
            StandardTag::from_program_name("/usr/local/bin/flac-year"),
            Some(StandardTag::Year)
        );
        assert_eq!(StandardTag::from_program_name("flac-track.exe"), Some(StandardTag::Track));
        assert_eq!(StandardTag::from_program_name("flacted"), None);
        assert_eq!(StandardTag::from_program_name("flac-bogus"), None);
    }

    #[test]
    fn standard_tag_parses_short_and_field_names() {
        assert_eq!("Track".parse::<StandardTag>().unwrap(), StandardTag::Track);
        assert_eq!("tracknumber".parse::<StandardTag>().unwrap(), StandardTag::Track);
        assert_eq!("date".parse::<StandardTag>().unwrap(), StandardTag::Year);
        assert!("composer".parse::<StandardTag>().is_err());
    }
}
