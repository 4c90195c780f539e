//! Scratch space for intermediate artifacts.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A private temporary directory for files that only live for the duration
/// of one pipeline, such as a subtitle track extracted by `only`.
///
/// The directory and everything in it is removed by [`Workspace::cleanup`] or
/// on drop, whichever comes first. Removal errors are discarded: a leftover
/// temp file must never hide the result of the operation that used it.
///
/// # Example
///
/// ```no_run
/// use mkvtool_av::Workspace;
///
/// let workspace = Workspace::new()?;
/// let extracted = workspace.temp_file("track-3.srt");
/// // ... write and consume `extracted` ...
/// workspace.cleanup();
/// assert!(!extracted.exists());
/// # Ok::<(), mkvtool_av::Error>(())
/// ```
pub struct Workspace {
    root: PathBuf,
    temp_dir: Option<TempDir>,
}

impl Workspace {
    /// Create a new workspace in the system temp directory.
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("mkvtool-")
            .tempdir()
            .map_err(|e| Error::Workspace(e.to_string()))?;
        Ok(Self {
            root: temp_dir.path().to_path_buf(),
            temp_dir: Some(temp_dir),
        })
    }

    /// A workspace that only names paths, for dry runs. Nothing is created
    /// on disk and cleanup is a no-op.
    pub fn planned() -> Self {
        Self {
            root: std::env::temp_dir().join(format!("mkvtool-{}", std::process::id())),
            temp_dir: None,
        }
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        &self.root
    }

    /// Create a temp file path with the given name. The file itself is not
    /// created.
    pub fn temp_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Remove the workspace, ignoring failures.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn cleanup(self) {
        if let Some(temp_dir) = self.temp_dir {
            if let Err(e) = temp_dir.close() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Failed to remove workspace: {}", e);
            }
        }
    }
}
