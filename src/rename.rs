//! Scene-name based printing and renaming.

use anyhow::{bail, Result};
use mkvtool_av::{Operation, Runner};
use mkvtool_parser::{parse, placeholders, render, FIELD_NAMES};
use std::path::{Path, PathBuf};

/// Render `mask` against the metadata parsed from `path`'s file name.
///
/// Fails only when the result is empty.
pub fn format_name(mask: &str, path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let metadata = parse(&file_name);
    let name = render(mask, &metadata);
    if name.is_empty() {
        bail!("format {:?} produced an empty name", mask);
    }
    Ok(name)
}

/// Warn about placeholders no parsed name can ever fill.
pub fn check_mask(mask: &str) {
    for name in placeholders(mask) {
        if !FIELD_NAMES.contains(&name) {
            tracing::warn!("Unknown field %{{{}}} in format; it will render empty", name);
        }
    }
}

/// Destination `path` would be renamed to under `mask`, in the same
/// directory.
pub fn target_path(mask: &str, path: &Path) -> Result<PathBuf> {
    Ok(path.with_file_name(format_name(mask, path)?))
}

/// Rename `path` according to `mask` through `runner`.
///
/// A file that already has the target name is left alone. An existing file
/// at the destination is never overwritten.
pub fn rename(runner: &dyn Runner, mask: &str, path: &Path) -> Result<()> {
    let target = target_path(mask, path)?;

    if target == path {
        tracing::debug!("{:?} already has the requested name", path);
        return Ok(());
    }
    if target.exists() {
        bail!("destination {:?} already exists", target);
    }

    runner.execute(&Operation::Rename {
        from: path.to_path_buf(),
        to: target,
    })?;
    Ok(())
}
