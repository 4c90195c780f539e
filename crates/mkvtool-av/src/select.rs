//! Language-preference subtitle selection.

use crate::probe::Track;
use crate::{Error, Result};

/// Preference entry matching tracks that carry no language tag.
pub const UNTAGGED: &str = "default";

/// Pick the subtitle track to mark as default.
///
/// Tracks whose name contains any `ignore` substring are dropped first
/// (exact, case-sensitive match). Preferences are then tried in order and the
/// first one matching any remaining track wins; among its matches the track
/// that comes first in the container is chosen. This is a strict priority
/// ladder, not a score.
///
/// # Errors
///
/// [`Error::NoMatchingTrack`] when no preference matches a remaining track.
///
/// # Example
///
/// ```
/// use mkvtool_av::probe::{Track, TrackKind};
/// use mkvtool_av::select::track_by_language;
///
/// let sub = |number: u64, lang: &str| Track {
///     number,
///     id: number - 1,
///     uid: None,
///     kind: TrackKind::Subtitles,
///     codec_id: None,
///     codec: String::new(),
///     language: Some(lang.to_string()),
///     name: None,
///     default: false,
///     forced: false,
/// };
///
/// let tracks = [sub(1, "fr"), sub(2, "en")];
/// let prefs = ["en".to_string(), "fr".to_string()];
/// assert_eq!(track_by_language(&tracks, &prefs, &[]).unwrap(), 2);
/// ```
pub fn track_by_language(tracks: &[Track], preferences: &[String], ignore: &[String]) -> Result<u64> {
    let candidates: Vec<&Track> = tracks
        .iter()
        .filter(|t| t.is_subtitle())
        .filter(|t| !is_ignored(t, ignore))
        .collect();

    preferences
        .iter()
        .find_map(|pref| {
            candidates
                .iter()
                .find(|t| language_matches(t, pref))
                .map(|t| t.number)
        })
        .ok_or_else(|| Error::NoMatchingTrack {
            languages: preferences.to_vec(),
        })
}

fn is_ignored(track: &Track, ignore: &[String]) -> bool {
    match &track.name {
        Some(name) => ignore.iter().any(|needle| name.contains(needle.as_str())),
        None => false,
    }
}

fn language_matches(track: &Track, preference: &str) -> bool {
    if preference == UNTAGGED {
        track.language.is_none()
    } else {
        track.language.as_deref() == Some(preference)
    }
}
