//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of one binary.

/// `flac2mp3`: one MP3 per FLAC file.
pub mod convert;

/// `flacs2mp3-cue`: one MP3 plus cue sheet for several FLAC files.
pub mod cue;

/// `flacted` and the `flac-<tag>` personalities.
pub mod tag;
