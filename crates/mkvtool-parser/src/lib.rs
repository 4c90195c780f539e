//! # mkvtool-parser
//!
//! Scene release-name parsing and `%{field}` mask rendering.
//!
//! Both are pure functions: parsing never fails, it only leaves fields it
//! could not recognize out of the result, and rendering substitutes an empty
//! string for any field the metadata lacks.
//!
//! ## Quick Start
//!
//! ```
//! use mkvtool_parser::{parse, render};
//!
//! let meta = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
//!
//! assert_eq!(meta.get("title"), Some("The Matrix"));
//! assert_eq!(meta.get("year"), Some("1999"));
//! assert_eq!(meta.get("group"), Some("GROUP"));
//! assert_eq!(render("%{title} (%{year}).%{container}", &meta), "The Matrix (1999).mkv");
//! ```

pub mod lexer;
pub mod model;
mod parser;
pub mod template;

pub use model::{SceneMetadata, FIELD_NAMES};
pub use parser::parse;
pub use template::{placeholders, render};
