use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Set on every dispatched command to `<hook>@<root>`, so a nested
/// `hookmaster run` of the same hook can be refused
pub const ACTIVE_HOOK_ENV: &str = "HOOKMASTER_ACTIVE_HOOK";

/// Value of [`ACTIVE_HOOK_ENV`] while `hook` runs in `root`
pub fn active_hook_marker(hook: &str, root: &Path) -> String {
    format!("{hook}@{}", root.display())
}

/// Executes configured hook commands
pub trait CommandRunner {
    /// Run `command` in `cwd` and return its exit code.
    ///
    /// `name` becomes `$0` and `args` become `$1..$n` inside the command.
    fn run(&self, command: &str, name: &str, args: &[String], cwd: &Path) -> Result<i32>;
}

/// Runs commands through `<shell> -c`, inheriting stdio
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, name: &str, args: &[String], cwd: &Path) -> Result<i32> {
        tracing::info!("Running `{command}` in {}", cwd.display());

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .arg(name)
            .args(args)
            .current_dir(cwd)
            .env(ACTIVE_HOOK_ENV, active_hook_marker(name, cwd))
            .status()
            .with_context(|| format!("Failed to execute `{command}` with {}", self.shell))?;

        // Killed by a signal: no code to forward
        let code = status.code().unwrap_or(1);
        tracing::debug!("`{command}` exited with {code}");
        Ok(code)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_code_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShellRunner::new("sh");

        assert_eq!(runner.run("exit 7", "pre-commit", &[], temp_dir.path()).unwrap(), 7);
        assert_eq!(runner.run("true", "pre-commit", &[], temp_dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_arguments_and_cwd_are_forwarded() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShellRunner::new("sh");
        let args = vec!["origin".to_string(), "git@example.com:repo".to_string()];

        let code = runner
            .run(
                "test \"$0\" = pre-push && test \"$1\" = origin && pwd > where.txt",
                "pre-push",
                &args,
                temp_dir.path(),
            )
            .unwrap();
        assert_eq!(code, 0);
        assert!(temp_dir.path().join("where.txt").exists());
    }

    #[test]
    fn test_active_hook_is_exported() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShellRunner::new("sh");
        let check = format!(
            "test \"${ACTIVE_HOOK_ENV}\" = \"{}\"",
            active_hook_marker("pre-commit", temp_dir.path())
        );

        assert_eq!(runner.run(&check, "pre-commit", &[], temp_dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_missing_shell_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ShellRunner::new("/nonexistent/shell");
        assert!(runner.run("true", "pre-commit", &[], temp_dir.path()).is_err());
    }
}
