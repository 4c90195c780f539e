//! Multi-input merging and plain remuxing.

use std::path::{Path, PathBuf};

use mkvtool_common::paths::is_video_file;

use super::Context;
use crate::command::ToolCommand;
use crate::{Error, Result};

/// Merge all `inputs` into `output` with a single mkvmerge run.
///
/// With `copy_subs` unset, subtitle tracks embedded in video containers are
/// dropped (`--no-subtitles` applies to the file that follows it), while
/// standalone subtitle files are still muxed in.
pub fn merge(ctx: &Context<'_>, inputs: &[PathBuf], output: &Path, copy_subs: bool) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::InvalidInput("no input files".to_string()));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Merging {} input(s) into {:?}", inputs.len(), output);

    let mut cmd = ToolCommand::new(&ctx.tools.mkvmerge);
    cmd.arg("-o").arg(output);
    for input in inputs {
        if !copy_subs && is_video_file(input) {
            cmd.arg("--no-subtitles");
        }
        cmd.arg(input);
    }

    ctx.runner.execute(&cmd.into())?;
    Ok(())
}

/// Remux one file into `output`, keeping every track.
pub fn remux(ctx: &Context<'_>, input: &Path, output: &Path) -> Result<()> {
    merge(ctx, &[input.to_path_buf()], output, true)
}
