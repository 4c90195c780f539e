//! Path utilities for detecting file types by extension.
//!
//! Used by `merge` to decide which inputs get `--no-subtitles` and by the
//! scene parser to recognize the `container` field of a release name.

use std::path::Path;

/// Extensions of containers that may carry their own subtitle tracks.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mka", "mp4", "avi", "m4v", "ts", "m2ts", "webm", "mov", "wmv", "mpg",
];

/// Extensions of standalone subtitle files.
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "ssa", "sub", "vtt", "idx", "sup", "mks"];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path has a video container extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mkvtool_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has a subtitle file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mkvtool_common::paths::is_subtitle_file;
///
/// assert!(is_subtitle_file(Path::new("movie.srt")));
/// assert!(!is_subtitle_file(Path::new("video.mkv")));
/// ```
pub fn is_subtitle_file(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Return the lower-cased extension of `file_name` if it names a known media
/// or subtitle container.
///
/// Release names are full of dots, so an arbitrary trailing segment such as
/// `S01E02` or `x264-GROUP` is not treated as an extension.
pub fn container_extension(file_name: &str) -> Option<String> {
    let path = Path::new(file_name);
    if is_video_file(path) || is_subtitle_file(path) {
        extension_of(path)
    } else {
        None
    }
}
