//! # mkvtool-av
//!
//! Matroska track inspection and MKVToolNix orchestration.
//!
//! This crate provides functionality for:
//! - Locating `mkvmerge`, `mkvextract` and `mkvpropedit`
//! - Reading a file's track list via `mkvmerge -J`
//! - Choosing a subtitle track by language preference
//! - Merging, remuxing, single-subtitle extraction and default-flag editing
//!
//! Every mutation is an [`Operation`] handed to a [`Runner`]: [`LiveRunner`]
//! performs it, [`DryRunner`] only prints the equivalent command line.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use mkvtool_av::actions::{self, Context};
//! use mkvtool_av::{DryRunner, MkvmergeInspector, ToolOverrides, Toolset};
//! use std::path::Path;
//!
//! let tools = Toolset::locate(&ToolOverrides::default())?;
//! let inspector = MkvmergeInspector::new(&tools.mkvmerge);
//! let ctx = Context::new(&tools, &DryRunner, &inspector);
//!
//! actions::set_default(&ctx, Path::new("/path/to/video.mkv"), 3)?;
//! # Ok::<(), mkvtool_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod command;
pub mod probe;
pub mod runner;
pub mod select;
pub mod tools;
pub mod workspace;

// Re-exports
pub use command::{ToolCommand, ToolOutput};
pub use error::{Error, Result};
pub use probe::{Inspector, MatroskaFile, MkvmergeInspector, Track, TrackKind};
pub use runner::{DryRunner, LiveRunner, Operation, Outcome, Runner};
pub use tools::{require_tool, ToolOverrides, Toolset};
pub use workspace::Workspace;
