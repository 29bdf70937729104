//! `prepare-commit-msg` hook implementation
//!
//! Appends a summary line derived from the branch name to the commit message,
//! so `feature/AB-123-add-foo` yields `AB-123: Add foo`.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::git::BranchSource;

lazy_static! {
    /// Issue tracker key such as `AB-123`
    static ref TICKET_PATTERN: Regex = Regex::new(r"[A-Z]+-[0-9]+").unwrap();
}

/// Branches that carry no ticket and get a generic summary
const TRUNK_BRANCHES: [&str; 4] = ["HEAD", "master", "main", "dev"];

/// Summary line for a branch name
pub fn summary_line(branch: &str) -> String {
    if TRUNK_BRANCHES.contains(&branch) {
        return format!("Commit to: {branch}");
    }

    let Some(ticket) = TICKET_PATTERN.find(branch) else {
        return branch.to_string();
    };

    let tail = &branch[ticket.end()..];
    if tail.is_empty() {
        return ticket.as_str().to_string();
    }

    let description = describe(tail);
    if description.is_empty() {
        // `AB-123-` has a tail but nothing to say
        return ticket.as_str().to_string();
    }
    format!("{}: {}", ticket.as_str(), description)
}

/// `-add-foo` → `Add foo`. Only the first character is upper-cased.
fn describe(tail: &str) -> String {
    let words = tail.trim().trim_matches('-').replace('-', " ");
    capitalize_first(&words)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `message` with `summary` appended, or `None` when it already contains it
pub fn rewrite_message(message: &str, summary: &str) -> Option<String> {
    if message.contains(summary) {
        None
    } else {
        Some(format!("{message}\n{summary}"))
    }
}

/// Rewrite the commit message file in place. Returns whether it changed.
pub fn prepare_commit_msg(message_file: &Path, branches: &impl BranchSource) -> Result<bool> {
    let message = fs::read_to_string(message_file)
        .with_context(|| format!("Failed to read commit message {}", message_file.display()))?;

    let branch = branches.current_branch()?;
    let summary = summary_line(&branch);

    let Some(rewritten) = rewrite_message(&message, &summary) else {
        tracing::debug!("Commit message already contains '{summary}'");
        return Ok(false);
    };

    fs::write(message_file, rewritten)
        .with_context(|| format!("Failed to write commit message {}", message_file.display()))?;
    tracing::info!("Added '{summary}' to {}", message_file.display());
    Ok(true)
}
