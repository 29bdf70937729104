use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::{CONFIG_FILE_NAME, HookMapping, Settings};
use crate::hooks::install_hooks;
use crate::scanner;

#[derive(Args)]
pub struct AddArgs {
    /// Project path or directory to search for repositories
    pub path: PathBuf,
}

/// Install the built-in hooks into every repository below `path`, and the
/// configured hooks next to every `githooks.toml`.
///
/// A failing target is reported and skipped; the command fails at the end if
/// any target failed.
pub async fn execute(args: AddArgs, settings: &Settings, output: &Output) -> Result<()> {
    let path = std::path::absolute(&args.path)
        .with_context(|| format!("Failed to resolve {}", args.path.display()))?;

    if !path.exists() {
        output.warning(&format!("Path {} does not exist.", path.display()));
        return Ok(());
    }
    let path = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))?;

    if which::which(&settings.executable).is_err() {
        output.warning(&format!(
            "'{}' was not found on PATH; prepare-commit-msg will fail until it is installed",
            settings.executable
        ));
    }

    let project = scanner::scan(&path);
    if project.is_empty() {
        output.info(&format!(
            "No git repositories or {CONFIG_FILE_NAME} files found below {}",
            path.display()
        ));
        return Ok(());
    }

    let builtin = HookMapping::builtin(&settings.executable);
    let mut installed = 0;
    let mut failed = 0;

    for repo in &project.repositories {
        output.info(&format!("Hooking directory: {}", repo.display()));
        match install_hooks(repo, &builtin, output) {
            Ok(written) => installed += written.len(),
            Err(e) => {
                output.error(&format!("{e:#}"));
                failed += 1;
            }
        }
    }

    for dir in &project.config_dirs {
        output.info(&format!("Applying {}", dir.join(CONFIG_FILE_NAME).display()));
        match install_configured(dir, output) {
            Ok(count) => installed += count,
            Err(e) => {
                output.error(&format!("{e:#}"));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("Failed to install hooks in {failed} location(s)");
    }

    output.success(&format!("Installed {installed} hook(s)"));
    Ok(())
}

fn install_configured(dir: &Path, output: &Output) -> Result<usize> {
    match HookMapping::load(dir)? {
        Some(hooks) => Ok(install_hooks(dir, &hooks, output)?.len()),
        None => Ok(0),
    }
}
