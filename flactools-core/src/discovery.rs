//! File discovery module for finding FLAC files to convert.
//!
//! Only the top level of the given directory is searched, and the extension
//! check is case-insensitive.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds `.flac` files in `input_dir`, sorted by path.
///
/// Sorting matters: batch conversion and merging follow this order, and
/// track files are usually named with a leading track number.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The discovered files
/// * `Err(CoreError::Io)` - The directory could not be read
/// * `Err(CoreError::NoFilesFound)` - No .flac files were found
///
/// # Examples
///
/// ```rust,no_run
/// use flactools_core::find_flac_files;
/// use std::path::Path;
///
/// let files = find_flac_files(Path::new("/music/album")).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_flac_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| ext_str.eq_ignore_ascii_case("flac"))
                .map(|_| path.clone())
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort();
    Ok(files)
}
