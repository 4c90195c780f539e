//! Default subtitle flag editing.

use std::path::Path;

use super::Context;
use crate::command::ToolCommand;
use crate::probe::MatroskaFile;
use crate::select::track_by_language;
use crate::{Error, Result};

/// Make `track_number` the only default subtitle track of `path`.
///
/// # Errors
///
/// [`Error::TrackNotFound`] or [`Error::NotSubtitle`] if the track does not
/// name a subtitle track; nothing is modified in that case.
pub fn set_default(ctx: &Context<'_>, path: &Path, track_number: u64) -> Result<()> {
    let mkv = ctx.inspector.inspect(path)?;
    apply_default(ctx, &mkv, track_number)
}

/// Make the subtitle track chosen by language preference the default one.
///
/// Returns the selected track number. When no track matches, the file is
/// left untouched.
pub fn set_default_by_language(
    ctx: &Context<'_>,
    path: &Path,
    preferences: &[String],
    ignore: &[String],
) -> Result<u64> {
    let mkv = ctx.inspector.inspect(path)?;
    let number = track_by_language(&mkv.tracks, preferences, ignore)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Selected subtitle track {} of {:?}", number, path);

    apply_default(ctx, &mkv, number)?;
    Ok(number)
}

fn apply_default(ctx: &Context<'_>, mkv: &MatroskaFile, track_number: u64) -> Result<()> {
    let track = mkv.track(track_number).ok_or(Error::TrackNotFound {
        track: track_number,
    })?;
    if !track.is_subtitle() {
        return Err(Error::NotSubtitle {
            track: track_number,
        });
    }

    let mut cmd = ToolCommand::new(&ctx.tools.mkvpropedit);
    cmd.arg(&mkv.path);
    for sub in mkv.subtitles() {
        let flag = if sub.number == track_number { 1 } else { 0 };
        cmd.arg("--edit")
            .arg(format!("track:@{}", sub.number))
            .arg("--set")
            .arg(format!("flag-default={flag}"));
    }

    ctx.runner.execute(&cmd.into())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{movie_tracks, FakeInspector, RecordingRunner};
    use crate::tools::Toolset;

    fn langs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_default_clears_siblings() {
        let tools = Toolset::from_path_names();
        let runner = RecordingRunner::default();
        let inspector = FakeInspector::default().with_file("movie.mkv", movie_tracks());
        let ctx = Context::new(&tools, &runner, &inspector);

        set_default(&ctx, Path::new("movie.mkv"), 4).unwrap();

        assert_eq!(
            runner.command_lines(),
            vec![
                "mkvpropedit movie.mkv \
                 --edit track:@3 --set flag-default=0 \
                 --edit track:@4 --set flag-default=1 \
                 --edit track:@5 --set flag-default=0"
            ]
        );
    }

    #[test]
    fn test_set_default_rejects_non_subtitle() {
        let tools = Toolset::from_path_names();
        let runner = RecordingRunner::default();
        let inspector = FakeInspector::default().with_file("movie.mkv", movie_tracks());
        let ctx = Context::new(&tools, &runner, &inspector);

        let video = set_default(&ctx, Path::new("movie.mkv"), 1);
        assert!(matches!(video, Err(Error::NotSubtitle { track: 1 })));

        let missing = set_default(&ctx, Path::new("movie.mkv"), 42);
        assert!(matches!(missing, Err(Error::TrackNotFound { track: 42 })));

        assert!(runner.ops.borrow().is_empty());
    }

    #[test]
    fn test_set_default_missing_file() {
        let tools = Toolset::from_path_names();
        let runner = RecordingRunner::default();
        let inspector = FakeInspector::default();
        let ctx = Context::new(&tools, &runner, &inspector);

        let err = set_default(&ctx, Path::new("nope.mkv"), 3).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_by_language_follows_preference() {
        let tools = Toolset::from_path_names();
        let runner = RecordingRunner::default();
        let inspector = FakeInspector::default().with_file("movie.mkv", movie_tracks());
        let ctx = Context::new(&tools, &runner, &inspector);

        let picked =
            set_default_by_language(&ctx, Path::new("movie.mkv"), &langs(&["fre", "eng"]), &[])
                .unwrap();

        assert_eq!(picked, 4);
        assert!(runner.command_lines()[0].contains("--edit track:@4 --set flag-default=1"));
    }

    #[test]
    fn test_by_language_untagged_with_ignore() {
        let tools = Toolset::from_path_names();
        let runner = RecordingRunner::default();
        let inspector = FakeInspector::default().with_file("movie.mkv", movie_tracks());
        let ctx = Context::new(&tools, &runner, &inspector);

        let err = set_default_by_language(
            &ctx,
            Path::new("movie.mkv"),
            &langs(&["default"]),
            &langs(&["Commentary"]),
        )
        .unwrap_err();

        assert!(matches!(err, Error::NoMatchingTrack { .. }));
        assert!(runner.ops.borrow().is_empty());
    }
}
