mod cli;

use mkvtool::{config, rename};
use mkvtool_av::actions::{self, Context};
use mkvtool_av::{DryRunner, LiveRunner, MkvmergeInspector, Runner, Toolset};

use anyhow::{Context as _, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Per-file failures, reported together once every file was attempted.
#[derive(Default)]
struct Failures(Vec<String>);

impl Failures {
    fn record(&mut self, file: &Path, err: impl Display) {
        self.0.push(format!("{}: {}", file.display(), err));
    }

    fn check<T, E: Display>(&mut self, file: &Path, result: std::result::Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.record(file, e);
                None
            }
        }
    }
}

/// Files that can be stat'ed; the rest are skipped with a note.
fn readable(files: &[PathBuf]) -> Vec<&Path> {
    files
        .iter()
        .filter(|f| {
            let ok = std::fs::metadata(f).is_ok();
            if !ok {
                tracing::warn!("Note: File {:?} is not readable. Skipping.", f);
            }
            ok
        })
        .map(PathBuf::as_path)
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mkvtool=debug,mkvtool_av=debug".to_string()
        } else {
            "mkvtool=info,mkvtool_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    let runner: &dyn Runner = if cli.dry_run {
        println!("Dry-run mode: Will not modify any files.");
        &DryRunner
    } else {
        &LiveRunner
    };

    let tools = if cli.command.needs_tools() {
        Toolset::locate(&config.tools).context("Requirements check")?
    } else {
        Toolset::from_path_names()
    };
    let inspector = MkvmergeInspector::new(&tools.mkvmerge);
    let ctx = Context::new(&tools, runner, &inspector);

    let failures = dispatch(cli.command, &config, &ctx)?;

    if !failures.0.is_empty() {
        for failure in &failures.0 {
            tracing::error!("{}", failure);
        }
        anyhow::bail!("Execution failed");
    }
    Ok(())
}

fn dispatch(command: Commands, config: &config::Config, ctx: &Context<'_>) -> Result<Failures> {
    let mut failures = Failures::default();

    match command {
        Commands::Version => {
            println!("Build Version: {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Merge {
            output,
            subs,
            inputs,
        } => {
            failures.check(&output, actions::merge(ctx, &inputs, &output, subs));
        }
        Commands::Only {
            track,
            input,
            output,
        } => {
            failures.check(&input, actions::only(ctx, &input, track, &output));
        }
        Commands::Remux { input, output } => {
            failures.check(&input, actions::remux(ctx, &input, &output));
        }
        Commands::Print { format, files } => {
            let mask = format.unwrap_or_else(|| config.print.format.clone());
            rename::check_mask(&mask);
            for file in &files {
                if let Some(name) = failures.check(file, rename::format_name(&mask, file)) {
                    println!("{}", name);
                }
            }
        }
        Commands::Rename { format, files } => {
            let mask = format.unwrap_or_else(|| config.rename.format.clone());
            rename::check_mask(&mask);
            for file in readable(&files) {
                failures.check(file, rename::rename(ctx.runner, &mask, file));
            }
        }
        Commands::SetDefault { track, files } => {
            for file in readable(&files) {
                failures.check(file, actions::set_default(ctx, file, track));
            }
        }
        Commands::SetDefaultByLang {
            langs,
            ignore,
            files,
        } => {
            let preferred = if langs.is_empty() {
                config.languages.preferred.clone()
            } else {
                langs
            };
            if preferred.is_empty() {
                anyhow::bail!("No preferred languages: use --lang or set [languages] preferred");
            }
            let mut ignored = config.languages.ignore.clone();
            ignored.extend(ignore);

            for file in readable(&files) {
                let result = actions::set_default_by_language(ctx, file, &preferred, &ignored);
                if let Some(track) = failures.check(file, result) {
                    tracing::info!("{}: default subtitle track is now {}", file.display(), track);
                }
            }
        }
        Commands::Show { uid, files } => {
            for file in readable(&files) {
                if let Some(listing) = failures.check(file, actions::show(ctx, file, uid)) {
                    print!("{}", listing);
                }
            }
        }
    }

    Ok(failures)
}
