//! Command-line interface for hookmaster
//!
//! Parses arguments with clap and routes each subcommand to its handler in
//! [`commands`].

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use crate::config::Settings;
use commands::{add, ls, prepare_commit_msg, remove, run};

/// hookmaster - install and dispatch git hooks across a project tree
#[derive(Parser)]
#[command(
    name = "hookmaster",
    version,
    about = "Install, list, remove and dispatch git hooks",
    long_about = "hookmaster installs a prepare-commit-msg hook that summarises the branch name \
                  into every git repository below a directory, together with any hooks declared \
                  in githooks.toml files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install hooks into every git repository below a path
    Add(add::AddArgs),
    /// Append the branch summary to a commit message (called by git)
    PrepareCommitMsg(prepare_commit_msg::PrepareCommitMsgArgs),
    /// Execute the command configured for a hook in githooks.toml
    Run(run::RunArgs),
    /// List the hooks installed in the current repository
    Ls(ls::LsArgs),
    /// Delete every hook installed in the current repository
    Remove,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
        }

        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let settings = Settings::load()?;
        tracing::debug!("Settings: {settings:?}");

        match self.command {
            Some(Commands::Add(args)) => add::execute(args, &settings, &output).await,
            Some(Commands::PrepareCommitMsg(args)) => {
                prepare_commit_msg::execute(args, &output).await
            }
            Some(Commands::Run(args)) => run::execute(args, &settings, &output).await,
            Some(Commands::Ls(args)) => ls::execute(args, &output).await,
            Some(Commands::Remove) => remove::execute(&settings, &output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stderr keeps hook output and `ls --json` clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
