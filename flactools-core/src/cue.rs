// ============================================================================
// flactools-core/src/cue.rs
// ============================================================================
//
// CUE SHEETS: Track Index for a Single Merged MP3
//
// When several FLAC tracks are merged into one MP3, a cue sheet records where
// each original track starts. Offsets are the cumulative durations of the
// preceding tracks, written as MM:SS:FF with 75 frames per second.
//
// KEY COMPONENTS:
// - CueTrack / CueSheet: In-memory cue sheet
// - CueSheet::from_durations: Builds offsets from per-track durations
// - CueSheet::render: Text serialization
// - escape_quotes: Escaping for quoted cue strings

use crate::tags::TrackMetadata;

use std::fmt::Write as _;
use std::time::Duration;

/// Cue sheet frames per second.
pub const FRAMES_PER_SECOND: u64 = 75;

/// Escapes double quotes for use inside a quoted cue string.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Formats an offset as `MM:SS:FF`. Minutes are not capped at 99.
pub fn format_timestamp(offset: Duration) -> String {
    let frames = offset.as_millis() as u64 * FRAMES_PER_SECOND / 1000;
    let minutes = frames / (FRAMES_PER_SECOND * 60);
    let seconds = (frames / FRAMES_PER_SECOND) % 60;
    let frames = frames % FRAMES_PER_SECOND;
    format!("{minutes:02}:{seconds:02}:{frames:02}")
}

/// One track entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueTrack {
    pub number: u32,
    pub title: Option<String>,
    pub performer: Option<String>,
    pub start: Duration,
}

/// A cue sheet referencing a single MP3 file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueSheet {
    pub performer: Option<String>,
    pub title: Option<String>,
    /// File name as written in the `FILE` line, usually relative to the sheet
    pub file_name: String,
    pub tracks: Vec<CueTrack>,
}

impl CueSheet {
    /// Builds a sheet from each track's tags and duration, in play order.
    ///
    /// Album title and performer come from the first track unless given.
    pub fn from_durations(
        file_name: impl Into<String>,
        tracks: &[(TrackMetadata, Duration)],
        album: Option<String>,
        performer: Option<String>,
    ) -> Self {
        let first = tracks.first().map(|(m, _)| m);
        let title = album.or_else(|| first.and_then(|m| m.album.clone()));
        let performer = performer.or_else(|| first.and_then(|m| m.artist.clone()));

        let mut start = Duration::ZERO;
        let mut entries = Vec::with_capacity(tracks.len());
        for (index, (metadata, duration)) in tracks.iter().enumerate() {
            entries.push(CueTrack {
                number: index as u32 + 1,
                title: metadata.title.clone(),
                performer: metadata.artist.clone(),
                start,
            });
            start += *duration;
        }

        Self {
            performer,
            title,
            file_name: file_name.into(),
            tracks: entries,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        if let Some(performer) = &self.performer {
            writeln!(out, "PERFORMER \"{}\"", escape_quotes(performer))?;
        }
        if let Some(title) = &self.title {
            writeln!(out, "TITLE \"{}\"", escape_quotes(title))?;
        }
        writeln!(out, "FILE \"{}\" MP3", escape_quotes(&self.file_name))?;

        for track in &self.tracks {
            writeln!(out, "  TRACK {:02} AUDIO", track.number)?;
            if let Some(title) = &track.title {
                writeln!(out, "    TITLE \"{}\"", escape_quotes(title))?;
            }
            if let Some(performer) = &track.performer {
                writeln!(out, "    PERFORMER \"{}\"", escape_quotes(performer))?;
            }
            writeln!(out, "    INDEX 01 {}", format_timestamp(track.start))?;
        }
        Ok(())
    }
}
