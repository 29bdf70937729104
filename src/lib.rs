//! # hookmaster - git hooks for every repository in a project tree
//!
//! hookmaster finds every git repository below a directory and installs a small
//! set of shell hooks into each one:
//!
//! - a built-in `prepare-commit-msg` hook that appends a summary line derived
//!   from the branch name (`feature/AB-123-add-foo` becomes `AB-123: Add foo`)
//! - any hooks declared in a `githooks.toml` next to the repository
//!
//! ## Hook Configuration Example
//!
//! ```toml
//! # githooks.toml
//! pre-commit = "cargo fmt --check"
//! pre-push = "cargo test"
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Install hooks into every repository below ~/src
//! hookmaster add ~/src
//!
//! # Show and remove the hooks of the current repository
//! hookmaster ls
//! hookmaster remove
//!
//! # Execute the command configured for a hook
//! hookmaster run pre-commit
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod hooks;
pub mod scanner;

pub use cli::{Cli, Output};
pub use config::{HookMapping, Settings};

/// Result type alias for hookmaster operations
pub type Result<T> = anyhow::Result<T>;

/// Package name, the default executable the built-in hook calls
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
