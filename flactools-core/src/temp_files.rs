//! Temporary file management utilities.
//!
//! Merged audio outlives the call that creates it, so unlike scratch files
//! these paths are persisted: the tempfile crate only guarantees a unique
//! name, and cleanup is the caller's job.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};
use tempfile::Builder as TempFileBuilder;

/// Prefix of every merged WAV file.
pub const MERGE_PREFIX: &str = "flactools.merge_audio__";

/// Suffix of every merged WAV file.
pub const MERGE_SUFFIX: &str = "__.wav";

/// Creates an empty, uniquely named file and returns its path. Not deleted on drop.
///
/// Uses `dir` when given, the system temp directory otherwise.
pub fn create_persistent_temp_file(
    dir: Option<&Path>,
    prefix: &str,
    suffix: &str,
) -> CoreResult<PathBuf> {
    let mut builder = TempFileBuilder::new();
    builder.prefix(prefix).suffix(suffix);

    let temp_file = match dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            builder.tempfile_in(dir)?
        }
        None => builder.tempfile()?,
    };

    temp_file
        .into_temp_path()
        .keep()
        .map_err(|e| CoreError::Io(e.error))
}
