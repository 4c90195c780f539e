//! Matroska operations, one per mkvtool subcommand.
//!
//! - merging and remuxing
//! - keeping a single subtitle track (`only`)
//! - default-track flag editing, by number or by language
//! - track listing
//!
//! Every mutation goes through the [`Runner`] carried by [`Context`], so each
//! action behaves identically in live and dry-run mode apart from side
//! effects.

mod merge;
mod only;
mod setdefault;
mod show;

pub use merge::{merge, remux};
pub use only::only;
pub use setdefault::{set_default, set_default_by_language};
pub use show::show;

use crate::probe::Inspector;
use crate::runner::Runner;
use crate::tools::Toolset;

/// Collaborators shared by every action of one invocation.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Resolved MKVToolNix programs.
    pub tools: &'a Toolset,
    /// Live or dry runner.
    pub runner: &'a dyn Runner,
    /// Track list reader.
    pub inspector: &'a dyn Inspector,
}

impl<'a> Context<'a> {
    pub fn new(tools: &'a Toolset, runner: &'a dyn Runner, inspector: &'a dyn Inspector) -> Self {
        Self {
            tools,
            runner,
            inspector,
        }
    }
}
