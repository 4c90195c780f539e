//! `%{field}` mask rendering.

use crate::model::SceneMetadata;

/// Render a mask against scene metadata.
///
/// `%{name}` is replaced by the value of `name`, or by nothing when the field
/// is absent. Any `%` that does not open a complete `%{...}` placeholder is
/// copied through unchanged.
///
/// # Example
///
/// ```
/// use mkvtool_parser::{parse, render};
///
/// let meta = parse("My.Show.S01E02.1080p.mkv");
/// assert_eq!(render("%{title} - S%{season}E%{episode}.%{container}", &meta), "My Show - S01E02.mkv");
/// assert_eq!(render("%{title} [%{group}]", &meta), "My Show []");
/// ```
pub fn render(mask: &str, metadata: &SceneMetadata) -> String {
    let mut out = String::with_capacity(mask.len());
    let mut rest = mask;

    while let Some(pos) = rest.find("%{") {
        let after = &rest[pos + 2..];
        match after.find('}') {
            Some(close) => {
                out.push_str(&rest[..pos]);
                let name = &after[..close];
                out.push_str(metadata.get(name).unwrap_or_default());
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// List the placeholder names used by a mask, in order of appearance.
pub fn placeholders(mask: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = mask;

    while let Some(pos) = rest.find("%{") {
        let after = &rest[pos + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        names.push(&after[..close]);
        rest = &after[close + 1..];
    }

    names
}
