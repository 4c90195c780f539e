use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mkvtool")]
#[command(author, version, about = "Easy operations on matroska containers")]
pub struct Cli {
    /// Dry-run mode (only show commands)
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge input tracks and files (subtitle/video/audio) into an output file
    Merge {
        /// Output file
        #[arg(short, long, required = true)]
        output: PathBuf,

        /// Copy subs from video files
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        subs: bool,

        /// Input files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Remove all subtitle tracks, except one
    Only {
        /// Track number to keep
        track: u64,

        /// Matroska input file
        input: PathBuf,

        /// Matroska output file
        output: PathBuf,
    },

    /// Parse input filenames and print scene information using a mask
    Print {
        /// Formatting mask (defaults to the configured one)
        #[arg(short, long)]
        format: Option<String>,

        /// File names to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Remux input file into an output file
    Remux {
        /// Matroska input file
        input: PathBuf,

        /// Matroska output file
        output: PathBuf,
    },

    /// Rename files based on scene information in their names
    Rename {
        /// Formatting mask (defaults to the configured one)
        #[arg(short, long)]
        format: Option<String>,

        /// Files to rename
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Set default subtitle flag on a track
    #[command(name = "setdefault")]
    SetDefault {
        /// Track number to set as default
        track: u64,

        /// Matroska files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Set default subtitle track by language
    #[command(name = "setdefaultbylang")]
    SetDefaultByLang {
        /// Preferred languages, in order (use 'default' for tracks with no language set)
        #[arg(long = "lang", value_name = "CODE")]
        langs: Vec<String>,

        /// Ignore tracks with this string in the name
        #[arg(long = "ignore", value_name = "STR")]
        ignore: Vec<String>,

        /// Matroska files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show information about files
    Show {
        /// Include track UIDs in the output
        #[arg(short, long)]
        uid: bool,

        /// Matroska files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show version information
    Version,
}

impl Commands {
    /// Whether the subcommand drives MKVToolNix.
    pub fn needs_tools(&self) -> bool {
        !matches!(
            self,
            Commands::Print { .. } | Commands::Rename { .. } | Commands::Version
        )
    }
}
