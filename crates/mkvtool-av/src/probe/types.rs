//! Matroska track model.

use std::fmt;
use std::path::PathBuf;

/// Kind of media carried by a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
    Subtitles,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Video => write!(f, "video"),
            TrackKind::Audio => write!(f, "audio"),
            TrackKind::Subtitles => write!(f, "subtitles"),
        }
    }
}

/// One track of a parsed Matroska file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Matroska track number (1-based). Used by `mkvpropedit` selectors and
    /// by everything user facing.
    pub number: u64,
    /// mkvmerge track ID (0-based). Used by `mkvmerge` and `mkvextract`.
    pub id: u64,
    /// Track UID.
    pub uid: Option<u64>,
    /// Media kind.
    pub kind: TrackKind,
    /// Matroska codec ID (e.g. `S_TEXT/UTF8`).
    pub codec_id: Option<String>,
    /// Human readable codec name.
    pub codec: String,
    /// Language code; `None` when the track carries no language tag.
    pub language: Option<String>,
    /// Track name.
    pub name: Option<String>,
    /// Default flag.
    pub default: bool,
    /// Forced flag.
    pub forced: bool,
}

impl Track {
    /// Whether this is a subtitle track.
    pub fn is_subtitle(&self) -> bool {
        self.kind == TrackKind::Subtitles
    }

    /// File extension `mkvextract` output for this track should get.
    ///
    /// VobSub extracts to an `.idx`/`.sub` pair named after the `.idx` path;
    /// the `.idx` file is the one mkvmerge reads back.
    pub fn extract_extension(&self) -> &'static str {
        match self.codec_id.as_deref() {
            Some("S_TEXT/UTF8") | Some("S_TEXT/ASCII") => "srt",
            Some("S_TEXT/ASS") | Some("S_ASS") => "ass",
            Some("S_TEXT/SSA") | Some("S_SSA") => "ssa",
            Some("S_TEXT/WEBVTT") => "vtt",
            Some("S_HDMV/PGS") => "sup",
            Some("S_VOBSUB") => "idx",
            _ => "mks",
        }
    }
}

/// A parsed Matroska file: its path and tracks in container order.
///
/// This is a snapshot; changing the file on disk requires a new operation
/// and a new inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatroskaFile {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Tracks in container order.
    pub tracks: Vec<Track>,
}

impl MatroskaFile {
    /// Find a track by its Matroska track number.
    pub fn track(&self, number: u64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.number == number)
    }

    /// Subtitle tracks in container order.
    pub fn subtitles(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_subtitle())
    }
}
