//! Git hooks management module
//!
//! Hook scripts are two-line shell files in `.git/hooks`:
//!
//! ```sh
//! #!/bin/sh
//! hookmaster prepare-commit-msg "$@"
//! ```
//!
//! The built-in `prepare-commit-msg` hook calls back into hookmaster. Hooks
//! declared in `githooks.toml` contain the configured command directly, and
//! `hookmaster run <hook>` looks the command up at execution time instead.
//!
//! A configured command must not call `hookmaster run` for its own hook name:
//! the installed script would dispatch to itself without end. A nested run of
//! the hook already executing in the same repository is refused with an error.

mod executor;
mod prepare_commit_msg;
mod runner;
mod scripts;

pub use executor::{Dispatch, HookExecutor};
pub use prepare_commit_msg::{prepare_commit_msg, summary_line};
pub use runner::{ACTIVE_HOOK_ENV, CommandRunner, ShellRunner};
pub use scripts::{hooks_dir, install_hooks, list_hooks, remove_hooks, render_script};
