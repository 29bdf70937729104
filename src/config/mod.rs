//! Configuration for hookmaster
//!
//! Two unrelated kinds of configuration live here: the tool's own [`Settings`]
//! and the per-repository `githooks.toml` that maps hook names to commands.
//! Locating the repository those hooks belong to is also handled here.

mod discovery;
mod hooks_file;
mod settings;

pub use discovery::find_repository_root;
pub use hooks_file::{CONFIG_FILE_NAME, HookMapping};
pub use settings::Settings;
