//! Core library for FLAC tagging and FLAC-to-MP3 conversion using the
//! external `metaflac`, `flac`, `lame` and `sox` tools.
//!
//! Every operation builds an argument list, runs the tool synchronously
//! through a [`ProcessRunner`], and then verifies the artifact it expects.
//! Nothing is cached or retried, and the library never installs a logger:
//! it only emits through the `log` facade.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use flactools_core::{SystemRunner, ToolConfig, read_tag, decode_flac, encode_wav_to_mp3};
//! use std::path::Path;
//!
//! let runner = SystemRunner::new();
//! let config = ToolConfig::from_env();
//! let source = Path::new("/music/song.flac");
//!
//! match read_tag(&runner, &config, source, "ARTIST") {
//!     Ok(artist) => println!("artist: {artist}"),
//!     Err(e) if e.is_tag_not_found() => println!("artist: (unset)"),
//!     Err(e) => return Err(e),
//! }
//!
//! let wav = decode_flac(&runner, &config, source, None)?;
//! encode_wav_to_mp3(&runner, &config, &wav, Path::new("/music/song.mp3"), &config.lame_options)?;
//! # Ok::<(), flactools_core::CoreError>(())
//! ```

pub mod config;
pub mod cue;
pub mod discovery;
pub mod encoding;
pub mod error;
pub mod external;
pub mod pipeline;
pub mod stream_info;
pub mod tags;
pub mod temp_files;

// Re-exports for public API
pub use config::{LameOptions, ToolConfig};
pub use cue::{CueSheet, CueTrack};
pub use discovery::find_flac_files;
pub use encoding::{decode_flac, encode_wav_to_mp3, encode_wav_to_mp3_tagged, merge_audio};
pub use error::{CoreError, CoreResult};
pub use external::{ProcessOutput, ProcessRunner, SystemRunner, check_dependency};
pub use pipeline::{AlbumRequest, AlbumResult, Mp3Request, flac_to_mp3, flacs_to_mp3_with_cue};
pub use stream_info::{StreamInfo, read_stream_info};
pub use tags::{
    StandardTag, TrackMetadata, parse_tag_output, read_tag, read_tag_opt, read_track_metadata,
    remove_tag, write_tag,
};
