use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use super::runner::{CommandRunner, active_hook_marker};
use crate::config::{CONFIG_FILE_NAME, HookMapping, find_repository_root};

/// Outcome of dispatching a hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No repository above the starting directory
    NoRepository,
    /// The repository has no `githooks.toml`
    NoConfig { root: PathBuf },
    /// `githooks.toml` has no entry for the hook
    NotConfigured { root: PathBuf },
    /// The configured command ran and exited with `code`
    Completed { root: PathBuf, code: i32 },
}

impl Dispatch {
    /// Exit code the process should end with
    pub fn exit_code(&self) -> i32 {
        match self {
            Dispatch::Completed { code, .. } => *code,
            _ => 0,
        }
    }
}

pub struct HookExecutor<R> {
    runner: R,
    /// Marker of the hook this process was started from, if any
    active_hook: Option<String>,
}

impl<R: CommandRunner> HookExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            active_hook: None,
        }
    }

    /// Refuse to dispatch the hook identified by `marker` (see [`active_hook_marker`])
    pub fn with_active_hook(mut self, marker: Option<String>) -> Self {
        self.active_hook = marker;
        self
    }

    /// Run the command configured for `hook` in the repository enclosing
    /// `start` (the current directory when `None`).
    pub fn dispatch(&self, hook: &str, args: &[String], start: Option<&Path>) -> Result<Dispatch> {
        let Some(root) = find_repository_root(start)? else {
            return Ok(Dispatch::NoRepository);
        };

        let Some(hooks) = HookMapping::load(&root)? else {
            return Ok(Dispatch::NoConfig { root });
        };

        let Some(command) = hooks.get(hook) else {
            tracing::debug!("'{hook}' not configured in {}", root.display());
            return Ok(Dispatch::NotConfigured { root });
        };

        if self.active_hook.as_deref() == Some(active_hook_marker(hook, &root).as_str()) {
            bail!(
                "'{hook}' is already running in {}; its command in {} must not call \
                 `hookmaster run {hook}`",
                root.display(),
                root.join(CONFIG_FILE_NAME).display()
            );
        }

        let code = self.runner.run(command, hook, args, &root)?;
        Ok(Dispatch::Completed { root, code })
    }
}
