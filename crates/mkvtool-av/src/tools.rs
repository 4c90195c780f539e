//! External tool detection.
//!
//! mkvtool drives three MKVToolNix programs. [`Toolset::locate`] resolves all
//! of them up front so a missing installation aborts before any file is
//! touched.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Explicit tool locations, usually from the `[tools]` config section.
///
/// Unset entries are looked up on `PATH`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolOverrides {
    pub mkvmerge: Option<PathBuf>,
    pub mkvextract: Option<PathBuf>,
    pub mkvpropedit: Option<PathBuf>,
}

/// Resolved paths of the MKVToolNix programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolset {
    /// Multiplexer, also used to identify files (`mkvmerge -J`).
    pub mkvmerge: PathBuf,
    /// Track extractor.
    pub mkvextract: PathBuf,
    /// In-place header editor.
    pub mkvpropedit: PathBuf,
}

impl Toolset {
    /// Resolve every tool, preferring configured paths over `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] for the first tool that cannot be found.
    pub fn locate(overrides: &ToolOverrides) -> Result<Self> {
        Ok(Self {
            mkvmerge: get_tool_path("mkvmerge", overrides.mkvmerge.as_deref())?,
            mkvextract: get_tool_path("mkvextract", overrides.mkvextract.as_deref())?,
            mkvpropedit: get_tool_path("mkvpropedit", overrides.mkvpropedit.as_deref())?,
        })
    }

    /// Use the bare program names and let the OS resolve them at spawn time.
    pub fn from_path_names() -> Self {
        Self {
            mkvmerge: PathBuf::from("mkvmerge"),
            mkvextract: PathBuf::from("mkvextract"),
            mkvpropedit: PathBuf::from("mkvpropedit"),
        }
    }
}

/// Require that a tool is available on `PATH`, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Configured path for {} does not exist: {:?}, searching PATH",
            name,
            path
        );
    }

    require_tool(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_tool_not_found() {
        let err = require_tool("nonexistent_tool_12345").unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { ref tool } if tool == "nonexistent_tool_12345"));
    }

    #[test]
    fn test_configured_path_wins() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = get_tool_path("nonexistent_tool_12345", Some(file.path())).unwrap();
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_missing_configured_path_falls_back_to_path_lookup() {
        let result = get_tool_path(
            "nonexistent_tool_12345",
            Some(Path::new("/definitely/not/here")),
        );
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }
}
