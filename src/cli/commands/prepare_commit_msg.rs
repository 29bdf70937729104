use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::Output;
use crate::git::GitRepo;
use crate::hooks::prepare_commit_msg;

/// Arguments git passes to the `prepare-commit-msg` hook
#[derive(Args)]
pub struct PrepareCommitMsgArgs {
    /// File holding the commit message being prepared
    pub current_message_file: PathBuf,

    /// Source of the message (message, template, merge, squash or commit)
    pub source: Option<String>,

    /// Commit object name, for amends and `-c`/`-C`
    pub commit_object: Option<String>,
}

pub async fn execute(args: PrepareCommitMsgArgs, output: &Output) -> Result<()> {
    tracing::debug!(
        "prepare-commit-msg source={:?} commit={:?}",
        args.source,
        args.commit_object
    );

    let repo = GitRepo::discover()?;
    if prepare_commit_msg(&args.current_message_file, &repo)? {
        output.verbose("Added branch summary to commit message");
    } else {
        output.verbose("Commit message already contains the branch summary");
    }
    Ok(())
}
