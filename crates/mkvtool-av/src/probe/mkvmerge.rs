//! `mkvmerge -J` based inspection.
//!
//! mkvmerge's identification output is the most complete description of a
//! Matroska file MKVToolNix offers, and it reports both the mkvmerge track
//! IDs and the Matroska track numbers.

use super::types::*;
use super::Inspector;
use crate::command::ToolCommand;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Identification {
    container: IdentContainer,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    tracks: Vec<IdentTrack>,
}

#[derive(Debug, Deserialize)]
struct IdentContainer {
    #[serde(default)]
    recognized: bool,
    #[serde(rename = "type")]
    container_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdentTrack {
    id: u64,
    #[serde(rename = "type")]
    track_type: String,
    #[serde(default)]
    codec: String,
    #[serde(default)]
    properties: IdentProperties,
}

#[derive(Debug, Default, Deserialize)]
struct IdentProperties {
    number: Option<u64>,
    uid: Option<u64>,
    codec_id: Option<String>,
    language: Option<String>,
    track_name: Option<String>,
    #[serde(default)]
    default_track: bool,
    #[serde(default)]
    forced_track: bool,
}

/// Inspector backed by `mkvmerge -J`.
#[derive(Debug, Clone)]
pub struct MkvmergeInspector {
    mkvmerge: PathBuf,
}

impl MkvmergeInspector {
    /// Create an inspector running the given mkvmerge binary.
    pub fn new(mkvmerge: impl Into<PathBuf>) -> Self {
        Self {
            mkvmerge: mkvmerge.into(),
        }
    }
}

impl Inspector for MkvmergeInspector {
    fn inspect(&self, path: &Path) -> Result<MatroskaFile> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let mut cmd = ToolCommand::new(&self.mkvmerge);
        cmd.arg("-J").arg(path);
        let output = cmd.output()?;

        // mkvmerge exits with 2 for unrecognized files but still prints JSON
        // describing why; only fall back to the exit status without it.
        match parse_identification(path, &output.stdout) {
            Err(Error::Json(_)) if !output.status.success() => Err(cmd.failure(&output)),
            other => other,
        }
    }
}

/// Convert `mkvmerge -J` output into a [`MatroskaFile`].
pub fn parse_identification(path: &Path, json: &str) -> Result<MatroskaFile> {
    let ident: Identification = serde_json::from_str(json)?;

    if let Some(first) = ident.errors.first() {
        if !ident.container.recognized {
            return Err(Error::NotMatroska {
                path: path.to_path_buf(),
            });
        }
        return Err(Error::parse_error("mkvmerge", first.clone()));
    }

    let is_matroska = ident.container.recognized
        && ident
            .container
            .container_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("matroska"));
    if !is_matroska {
        return Err(Error::NotMatroska {
            path: path.to_path_buf(),
        });
    }

    let tracks = ident
        .tracks
        .into_iter()
        .filter_map(|t| {
            let kind = match t.track_type.as_str() {
                "video" => TrackKind::Video,
                "audio" => TrackKind::Audio,
                "subtitles" => TrackKind::Subtitles,
                _ => return None,
            };
            let props = t.properties;
            Some(Track {
                number: props.number.unwrap_or(t.id + 1),
                id: t.id,
                uid: props.uid,
                kind,
                codec_id: props.codec_id,
                codec: t.codec,
                language: props.language.filter(|l| !l.is_empty()),
                name: props.track_name.filter(|n| !n.is_empty()),
                default: props.default_track,
                forced: props.forced_track,
            })
        })
        .collect();

    Ok(MatroskaFile {
        path: path.to_path_buf(),
        tracks,
    })
}
