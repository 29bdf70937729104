use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{CONFIG_FILE_NAME, Settings};
use crate::hooks::{ACTIVE_HOOK_ENV, Dispatch, HookExecutor, ShellRunner};

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Hook name to run
    pub hook: String,

    /// Additional arguments for the hook, available to the command as $1..$n
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub async fn execute(args: RunArgs, settings: &Settings, output: &Output) -> Result<()> {
    let executor = HookExecutor::new(ShellRunner::new(settings.shell.as_str()))
        .with_active_hook(std::env::var(ACTIVE_HOOK_ENV).ok());

    let outcome = executor.dispatch(&args.hook, &args.args, None)?;
    match &outcome {
        Dispatch::NoRepository => {
            output.info("Not in a git repository, nothing to run");
        }
        Dispatch::NoConfig { root } => {
            output.info(&format!(
                "No {CONFIG_FILE_NAME} in {}, nothing to run",
                root.display()
            ));
        }
        Dispatch::NotConfigured { root } => {
            output.info(&format!(
                "No '{}' hook configured in {}",
                args.hook,
                root.join(CONFIG_FILE_NAME).display()
            ));
        }
        Dispatch::Completed { code, .. } => {
            output.verbose(&format!("Hook '{}' exited with {code}", args.hook));
        }
    }

    let code = outcome.exit_code();
    if code != 0 {
        output.error(&format!("Hook '{}' failed with exit code {code}", args.hook));
        // Git treats the hook as failed from our exit status
        std::process::exit(code);
    }
    Ok(())
}
