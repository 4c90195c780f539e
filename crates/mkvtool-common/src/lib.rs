//! Mkvtool-Common: helpers shared by the parser, the toolset wrappers and
//! the command-line frontend.
//!
//! - **Path Utilities**: classify files by extension (video containers,
//!   subtitle sidecars, anything the scene parser accepts as a container)
//!
//! # Examples
//!
//! ```
//! use mkvtool_common::paths::{container_extension, is_video_file};
//! use std::path::Path;
//!
//! assert!(is_video_file(Path::new("movie.mkv")));
//! assert_eq!(container_extension("Show.S01E01.MKV"), Some("mkv".to_string()));
//! ```

pub mod paths;
