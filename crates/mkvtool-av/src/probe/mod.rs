//! Container inspection.
//!
//! Reading a file's track list is the one collaborator the orchestration
//! layer consults without going through a [`Runner`](crate::Runner): it never
//! mutates anything, so it runs the same way in dry-run mode.

mod mkvmerge;
mod types;

pub use mkvmerge::{parse_identification, MkvmergeInspector};
pub use types::*;

use crate::Result;
use std::path::Path;

/// Reads a Matroska file's track list.
pub trait Inspector {
    /// Parse the file at `path`.
    ///
    /// Fails if the file cannot be opened or is not a valid Matroska file.
    fn inspect(&self, path: &Path) -> Result<MatroskaFile>;
}
