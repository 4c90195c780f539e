//! Track listing.

use std::fmt::Write;
use std::path::Path;

use super::Context;
use crate::probe::{MatroskaFile, Track};
use crate::Result;

/// Describe the tracks of `path`, one line per track after a `File:` header.
///
/// Read-only: the inspector is consulted directly, never the runner.
pub fn show(ctx: &Context<'_>, path: &Path, with_uid: bool) -> Result<String> {
    let mkv = ctx.inspector.inspect(path)?;
    Ok(describe(&mkv, with_uid))
}

fn describe(mkv: &MatroskaFile, with_uid: bool) -> String {
    let mut out = format!("File: {}\n", mkv.path.display());
    for track in &mkv.tracks {
        out.push_str("  ");
        out.push_str(&describe_track(track, with_uid));
        out.push('\n');
    }
    out
}

fn describe_track(track: &Track, with_uid: bool) -> String {
    let mut line = format!("Track {}: {}, {}", track.number, track.kind, track.codec);
    let _ = write!(
        line,
        ", language: {}",
        track.language.as_deref().unwrap_or("none")
    );
    if let Some(name) = &track.name {
        let _ = write!(line, ", name: {name:?}");
    }
    if track.default {
        line.push_str(", default");
    }
    if track.forced {
        line.push_str(", forced");
    }
    if with_uid {
        match track.uid {
            Some(uid) => {
                let _ = write!(line, ", uid: {uid}");
            }
            None => line.push_str(", uid: unknown"),
        }
    }
    line
}
