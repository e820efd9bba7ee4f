// ============================================================================
// flactools-core/src/pipeline.rs
// ============================================================================
//
// PIPELINES: Multi-step Conversions Built from the Single-step Operations
//
// This module chains decode, encode, merge and tag reading into the two
// conversions the binaries offer. Intermediate WAV files are created and
// removed here; they are never handed to the caller.
//
// KEY COMPONENTS:
// - flac_to_mp3: One FLAC file to one tagged MP3
// - flacs_to_mp3_with_cue: Several FLAC files to one MP3 plus a cue sheet
// - IntermediateFiles: Drop guard deleting intermediate WAVs on every path

// ---- Internal crate imports ----
use crate::config::{LameOptions, ToolConfig};
use crate::cue::CueSheet;
use crate::encoding::{decode_flac, encode_wav_to_mp3_tagged, merge_audio, wav_path_for};
use crate::error::{CoreError, CoreResult};
use crate::external::ProcessRunner;
use crate::stream_info::read_stream_info;
use crate::tags::{TrackMetadata, read_track_metadata};

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// INTERMEDIATE FILE CLEANUP
// ============================================================================

/// Deletes the files it holds when dropped.
#[derive(Debug, Default)]
struct IntermediateFiles(Vec<PathBuf>);

impl IntermediateFiles {
    fn push(&mut self, path: PathBuf) {
        self.0.push(path);
    }

    fn paths(&self) -> &[PathBuf] {
        &self.0
    }
}

impl Drop for IntermediateFiles {
    fn drop(&mut self) {
        for path in &self.0 {
            match fs::remove_file(path) {
                Ok(()) => log::debug!("Removed intermediate {}", path.display()),
                Err(e) => log::warn!("Could not remove intermediate {}: {e}", path.display()),
            }
        }
    }
}

// ============================================================================
// SINGLE FILE CONVERSION
// ============================================================================

/// Parameters for converting one FLAC file.
#[derive(Debug, Clone, Default)]
pub struct Mp3Request {
    pub source: PathBuf,
    /// Output MP3; `<source stem>.mp3` beside the source when unset
    pub output: Option<PathBuf>,
    /// Encoder options; the configured defaults when unset
    pub lame_options: Option<LameOptions>,
    /// Where to move the source after a successful conversion
    pub move_source_to: Option<PathBuf>,
    /// Copy the standard tags into ID3 tags
    pub copy_tags: bool,
}

impl Mp3Request {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            copy_tags: true,
            ..Self::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.source.with_extension("mp3"))
    }
}

/// Converts one FLAC file to MP3 and returns the MP3 path.
///
/// The intermediate WAV is removed whether or not encoding succeeds. The
/// source is moved only once the MP3 has been verified.
pub fn flac_to_mp3<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    request: &Mp3Request,
) -> CoreResult<PathBuf> {
    let output = request.output_path();
    reject_clobbering_output(&output, std::slice::from_ref(&request.source))?;
    let options = request
        .lame_options
        .as_ref()
        .unwrap_or(&config.lame_options);

    let metadata = if request.copy_tags {
        read_track_metadata(runner, config, &request.source)?
    } else {
        TrackMetadata::default()
    };

    let mut intermediates = IntermediateFiles::default();
    intermediates.push(decode_flac(runner, config, &request.source, None)?);

    encode_wav_to_mp3_tagged(
        runner,
        config,
        &intermediates.paths()[0],
        &output,
        options,
        &metadata,
    )?;
    drop(intermediates);

    if let Some(destination) = &request.move_source_to {
        relocate(&request.source, destination)?;
    }

    log::info!("Converted {} to {}", request.source.display(), output.display());
    Ok(output)
}

/// Fails when `output` would overwrite a source or one of the intermediate
/// WAVs decoded from it.
fn reject_clobbering_output(output: &Path, sources: &[PathBuf]) -> CoreResult<()> {
    for source in sources {
        let clash = if output == source.as_path() {
            Some("the source file")
        } else if output == wav_path_for(source) {
            Some("the intermediate WAV")
        } else {
            None
        };
        if let Some(what) = clash {
            return Err(CoreError::InvalidInput(format!(
                "output {} would overwrite {what} of {}",
                output.display(),
                source.display()
            )));
        }
    }
    Ok(())
}

fn relocate(from: &Path, to: &Path) -> CoreResult<()> {
    log::info!("Moving {} to {}", from.display(), to.display());
    fs::rename(from, to).map_err(|source| CoreError::Relocate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

// ============================================================================
// ALBUM CONVERSION WITH CUE SHEET
// ============================================================================

/// Parameters for merging several FLAC files into one MP3.
#[derive(Debug, Clone, Default)]
pub struct AlbumRequest {
    /// Sources in play order
    pub sources: Vec<PathBuf>,
    pub output: PathBuf,
    pub lame_options: Option<LameOptions>,
    /// Cue/ID3 album title; taken from the first source when unset
    pub album: Option<String>,
    /// Cue/ID3 album performer; taken from the first source when unset
    pub performer: Option<String>,
}

/// What an album conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumResult {
    pub mp3: PathBuf,
    pub cue: PathBuf,
    pub cue_sheet: CueSheet,
}

/// The cue sheet path written next to `output`.
pub fn cue_path_for(output: &Path) -> PathBuf {
    output.with_extension("cue")
}

/// Decodes every source, merges them in order, encodes a single MP3 and
/// writes a cue sheet marking where each source starts.
pub fn flacs_to_mp3_with_cue<R: ProcessRunner>(
    runner: &R,
    config: &ToolConfig,
    request: &AlbumRequest,
) -> CoreResult<AlbumResult> {
    if request.sources.is_empty() {
        return Err(CoreError::InvalidInput(
            "no source files given".to_string(),
        ));
    }
    reject_clobbering_output(&request.output, &request.sources)?;
    let options = request
        .lame_options
        .as_ref()
        .unwrap_or(&config.lame_options);

    let mut tracks: Vec<(TrackMetadata, Duration)> = Vec::with_capacity(request.sources.len());
    for source in &request.sources {
        let metadata = read_track_metadata(runner, config, source)?;
        let duration = read_stream_info(runner, config, source)?.duration();
        log::debug!("{}: {:?}", source.display(), duration);
        tracks.push((metadata, duration));
    }

    let mut wavs = IntermediateFiles::default();
    for source in &request.sources {
        wavs.push(decode_flac(runner, config, source, None)?);
    }

    let mut merged = IntermediateFiles::default();
    merged.push(merge_audio(runner, config, wavs.paths())?);
    drop(wavs);

    let file_name = request
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "output path '{}' has no file name",
                request.output.display()
            ))
        })?;
    let cue_sheet = CueSheet::from_durations(
        file_name,
        &tracks,
        request.album.clone(),
        request.performer.clone(),
    );

    let album_tags = album_metadata(&tracks, &cue_sheet);
    encode_wav_to_mp3_tagged(
        runner,
        config,
        &merged.paths()[0],
        &request.output,
        options,
        &album_tags,
    )?;
    drop(merged);

    let cue = cue_path_for(&request.output);
    fs::write(&cue, cue_sheet.render())?;
    log::info!("Wrote cue sheet {}", cue.display());

    Ok(AlbumResult {
        mp3: request.output.clone(),
        cue,
        cue_sheet,
    })
}

// The merged file gets album-level tags only
fn album_metadata(tracks: &[(TrackMetadata, Duration)], sheet: &CueSheet) -> TrackMetadata {
    let first = tracks.first().map(|(m, _)| m.clone()).unwrap_or_default();
    TrackMetadata {
        album: sheet.title.clone(),
        artist: sheet.performer.clone(),
        genre: first.genre,
        title: sheet.title.clone(),
        track: None,
        year: first.year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_sibling_mp3() {
        let request = Mp3Request::new("/music/01 Intro.flac");
        assert_eq!(request.output_path(), PathBuf::from("/music/01 Intro.mp3"));
        assert!(request.copy_tags);
    }

    #[test]
    fn cue_path_replaces_extension() {
        assert_eq!(cue_path_for(Path::new("out/album.mp3")), PathBuf::from("out/album.cue"));
    }

    #[test]
    fn intermediate_files_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.wav");
        fs::write(&a, b"x").unwrap();
        {
            let mut files = IntermediateFiles::default();
            files.push(a.clone());
            // Missing files only produce a warning
            files.push(dir.path().join("missing.wav"));
        }
        assert!(!a.exists());
    }
}
