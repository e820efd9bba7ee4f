//! Audio conversion steps built on the external tools.
//!
//! Each step is a single transaction: spawn, wait, verify the expected
//! artifact, then return its path or fail.

pub mod decode;
pub mod merger;
pub mod mp3;

pub use decode::{WAV_EXTENSION, decode_flac, wav_path_for};
pub use merger::merge_audio;
pub use mp3::{encode_wav_to_mp3, encode_wav_to_mp3_tagged, id3_args};
