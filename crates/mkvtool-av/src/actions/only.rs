//! Keep a single subtitle track.

use std::ffi::OsString;
use std::path::Path;

use super::Context;
use crate::command::ToolCommand;
use crate::probe::Track;
use crate::workspace::Workspace;
use crate::{Error, Result};

/// Rewrite `input` into `output` with `track_number` as the sole, default
/// subtitle track.
///
/// The track is extracted into a private workspace and muxed back on top of a
/// subtitle-free copy of the input. The workspace is removed whether or not
/// either step succeeds. In dry-run mode the workspace paths are only named,
/// never created.
pub fn only(ctx: &Context<'_>, input: &Path, track_number: u64, output: &Path) -> Result<()> {
    let mkv = ctx.inspector.inspect(input)?;
    let track = mkv
        .track(track_number)
        .ok_or(Error::TrackNotFound {
            track: track_number,
        })?;
    if !track.is_subtitle() {
        return Err(Error::NotSubtitle {
            track: track_number,
        });
    }

    let workspace = if ctx.runner.is_dry_run() {
        Workspace::planned()
    } else {
        Workspace::new()?
    };
    let result = extract_and_mux(ctx, input, track, output, &workspace);
    workspace.cleanup();
    result
}

fn extract_and_mux(
    ctx: &Context<'_>,
    input: &Path,
    track: &Track,
    output: &Path,
    workspace: &Workspace,
) -> Result<()> {
    let extracted = workspace.temp_file(&format!(
        "track-{}.{}",
        track.number,
        track.extract_extension()
    ));

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Extracting track {} of {:?} to {:?}",
        track.number,
        input,
        extracted
    );

    let mut selector = OsString::from(format!("{}:", track.id));
    selector.push(extracted.as_os_str());
    let mut extract = ToolCommand::new(&ctx.tools.mkvextract);
    extract.arg(input).arg("tracks").arg(selector);
    ctx.runner.execute(&extract.into())?;

    let mut mux = ToolCommand::new(&ctx.tools.mkvmerge);
    mux.arg("-o").arg(output).arg("--no-subtitles").arg(input);
    if let Some(language) = &track.language {
        mux.arg("--language").arg(format!("0:{language}"));
    }
    if let Some(name) = &track.name {
        mux.arg("--track-name").arg(format!("0:{name}"));
    }
    mux.args(["--default-track", "0:yes"]).arg(&extracted);
    ctx.runner.execute(&mux.into())?;

    Ok(())
}
