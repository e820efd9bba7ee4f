// ============================================================================
// flactools-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: External Tool Locations and Encoder Defaults
//
// This module defines the configuration passed explicitly to every core
// operation: which programs to run for each external tool, the default lame
// arguments and where merged temporary audio is written.
//
// KEY COMPONENTS:
// - ToolConfig: Program names/paths plus encoder and temp-dir settings
// - LameOptions: Ordered encoder arguments placed before `-S`
// - Environment variable names honored by ToolConfig::from_env
//
// USAGE:
// Instances of ToolConfig are created by consumers of the library (like
// flactools-cli) and passed by reference into tags, convert, encode and merge.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- External crate imports ----
use serde::{Deserialize, Serialize};

// ---- Standard library imports ----
use std::env;
use std::path::PathBuf;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Default program used to read and write FLAC tags.
pub const DEFAULT_METAFLAC: &str = "metaflac";

/// Default program used to decode FLAC to WAV.
pub const DEFAULT_FLAC: &str = "flac";

/// Default MP3 encoder.
pub const DEFAULT_LAME: &str = "lame";

/// Default audio concatenation tool.
pub const DEFAULT_SOX: &str = "sox";

/// Default lame arguments: highest-quality variable bitrate.
pub const DEFAULT_LAME_OPTIONS: [&str; 2] = ["-V", "0"];

// ---- Environment overrides ----
pub const ENV_METAFLAC: &str = "FLACTOOLS_METAFLAC";
pub const ENV_FLAC: &str = "FLACTOOLS_FLAC";
pub const ENV_LAME: &str = "FLACTOOLS_LAME";
pub const ENV_SOX: &str = "FLACTOOLS_SOX";
pub const ENV_TMPDIR: &str = "FLACTOOLS_TMPDIR";
pub const ENV_LAME_OPTIONS: &str = "FLACTOOLS_LAME_OPTIONS";

// ============================================================================
// LAME OPTIONS
// ============================================================================

/// Arguments passed to lame ahead of the fixed `-S <input> <output>` tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LameOptions(Vec<String>);

impl LameOptions {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }

    /// Splits a whitespace-separated option string such as `"-b 320 -q 0"`.
    pub fn parse(options: &str) -> Self {
        Self::new(options.split_whitespace())
    }

    pub fn args(&self) -> &[String] {
        &self.0
    }
}

impl Default for LameOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LAME_OPTIONS)
    }
}

// ============================================================================
// TOOL CONFIGURATION
// ============================================================================

/// Configuration shared by all core operations.
///
/// # Examples
///
/// ```rust
/// use flactools_core::ToolConfig;
///
/// let mut config = ToolConfig::default();
/// config.lame = "/opt/lame/bin/lame".to_string();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    // ---- Programs ----
    /// Tag reader/writer (`metaflac`)
    pub metaflac: String,

    /// FLAC decoder (`flac`)
    pub flac: String,

    /// MP3 encoder (`lame`)
    pub lame: String,

    /// Audio concatenation tool (`sox`)
    pub sox: String,

    // ---- Processing Options ----
    /// Options used when a caller does not pass its own
    pub lame_options: LameOptions,

    /// Directory for merged temporary WAV files; the system temp dir when unset
    pub temp_dir: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            metaflac: DEFAULT_METAFLAC.to_string(),
            flac: DEFAULT_FLAC.to_string(),
            lame: DEFAULT_LAME.to_string(),
            sox: DEFAULT_SOX.to_string(),
            lame_options: LameOptions::default(),
            temp_dir: None,
        }
    }
}

impl ToolConfig {
    /// Builds a configuration from defaults overridden by `FLACTOOLS_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(ENV_METAFLAC) {
            config.metaflac = v;
        }
        if let Some(v) = non_empty(ENV_FLAC) {
            config.flac = v;
        }
        if let Some(v) = non_empty(ENV_LAME) {
            config.lame = v;
        }
        if let Some(v) = non_empty(ENV_SOX) {
            config.sox = v;
        }
        if let Some(v) = non_empty(ENV_LAME_OPTIONS) {
            config.lame_options = LameOptions::parse(&v);
        }
        if let Some(v) = non_empty(ENV_TMPDIR) {
            config.temp_dir = Some(PathBuf::from(v));
        }

        config
    }

    /// Rejects empty program names.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, program) in [
            ("metaflac", &self.metaflac),
            ("flac", &self.flac),
            ("lame", &self.lame),
            ("sox", &self.sox),
        ] {
            if program.trim().is_empty() {
                return Err(CoreError::InvalidInput(format!(
                    "program for '{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Every external program this configuration refers to.
    pub fn programs(&self) -> [&str; 4] {
        [&self.metaflac, &self.flac, &self.lame, &self.sox]
    }
}
