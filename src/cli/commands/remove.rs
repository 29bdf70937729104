use anyhow::Result;

use crate::cli::Output;
use crate::config::{Settings, find_repository_root};
use crate::hooks::remove_hooks;

pub async fn execute(settings: &Settings, output: &Output) -> Result<()> {
    let Some(root) = find_repository_root(None)? else {
        output.info("Not in a git repository");
        return Ok(());
    };

    let removed = remove_hooks(&root, output)?;
    if removed.is_empty() {
        output.info("No hooks to remove");
    } else {
        output.success(&format!("Removed {} hook(s)", removed.len()));
    }

    output.info(&format!(
        "Run `{} add {}` to install them again",
        settings.executable,
        root.display()
    ));
    Ok(())
}
