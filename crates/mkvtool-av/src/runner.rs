//! Live and dry-run execution of mutating operations.
//!
//! Every change mkvtool makes to the filesystem is described as an
//! [`Operation`] and handed to a [`Runner`]. One runner is chosen per
//! invocation; code that builds operations never knows which one it has.

use std::fmt;
use std::path::PathBuf;

use crate::command::{shell_quote, ToolCommand, ToolOutput};
use crate::Result;

/// One external mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Run an external tool.
    Tool(ToolCommand),
    /// Rename a file.
    Rename { from: PathBuf, to: PathBuf },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Tool(cmd) => write!(f, "{cmd}"),
            Operation::Rename { from, to } => write!(
                f,
                "mv {} {}",
                shell_quote(from.as_os_str()),
                shell_quote(to.as_os_str())
            ),
        }
    }
}

impl From<ToolCommand> for Operation {
    fn from(cmd: ToolCommand) -> Self {
        Operation::Tool(cmd)
    }
}

/// What a runner did with an operation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The tool ran and succeeded.
    Ran(ToolOutput),
    /// The file was renamed.
    Renamed,
    /// Nothing ran; this is the description that was printed.
    Described(String),
}

/// Performs (or only describes) operations.
pub trait Runner {
    /// Execute one operation, blocking until it completes.
    fn execute(&self, op: &Operation) -> Result<Outcome>;

    /// Whether operations are only described. Callers use this to avoid
    /// preparing scratch files nothing will read.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Runs operations for real.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveRunner;

impl Runner for LiveRunner {
    fn execute(&self, op: &Operation) -> Result<Outcome> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Running: {}", op);

        match op {
            Operation::Tool(cmd) => cmd.execute().map(Outcome::Ran),
            Operation::Rename { from, to } => {
                std::fs::rename(from, to)?;
                Ok(Outcome::Renamed)
            }
        }
    }
}

/// Prints operations instead of running them. Never fails and never touches
/// the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunner;

impl Runner for DryRunner {
    fn execute(&self, op: &Operation) -> Result<Outcome> {
        let description = op.to_string();
        println!("{description}");
        Ok(Outcome::Described(description))
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
