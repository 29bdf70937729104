//! Git integration layer
//!
//! Thin wrapper over git2 used to resolve the branch a commit is being made on.

use anyhow::{Context, Result, bail};
use git2::Repository;
use std::path::Path;

/// Anything that can name the branch HEAD points at
pub trait BranchSource {
    fn current_branch(&self) -> Result<String>;
}

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Discover and open a git repository from the current directory
    pub fn discover() -> Result<Self> {
        Self::discover_from(".")
    }

    pub fn discover_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("No git repository found at {}", path.display()))?;
        Ok(GitRepo { repo })
    }
}

impl BranchSource for GitRepo {
    /// Short name of the branch HEAD refers to, like `git symbolic-ref --short HEAD`.
    ///
    /// Reads the symbolic target directly so unborn branches (no commits yet)
    /// resolve too. A detached HEAD is an error.
    fn current_branch(&self) -> Result<String> {
        let head = self
            .repo
            .find_reference("HEAD")
            .context("Failed to read HEAD reference")?;

        let Some(target) = head.symbolic_target() else {
            bail!("HEAD is detached; cannot determine the current branch");
        };

        let branch = target.strip_prefix("refs/heads/").unwrap_or(target);
        tracing::debug!("Current branch: {branch}");
        Ok(branch.to_string())
    }
}
