use anyhow::Result;
use clap::Args;
use indexmap::IndexMap;

use crate::cli::Output;
use crate::config::find_repository_root;
use crate::hooks::{hooks_dir, list_hooks};

#[derive(Args)]
pub struct LsArgs {
    /// Print hooks as a JSON object of name to content
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: LsArgs, output: &Output) -> Result<()> {
    let Some(root) = find_repository_root(None)? else {
        output.info("Not in a git repository");
        return Ok(());
    };

    let hooks = list_hooks(&root)?;

    if args.json {
        let hooks: IndexMap<String, String> = hooks.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&hooks)?);
        return Ok(());
    }

    if hooks.is_empty() {
        output.info(&format!("No hooks in {}", hooks_dir(&root).display()));
        return Ok(());
    }

    for (name, content) in &hooks {
        output.file(name, content);
    }
    Ok(())
}
