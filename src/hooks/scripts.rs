use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::HookMapping;

const SHEBANG: &str = "#!/bin/sh";

/// Full text of the hook script for `command`
pub fn render_script(command: &str) -> String {
    format!("{SHEBANG}\n{command}\n")
}

/// `<dir>/.git/hooks`
pub fn hooks_dir(dir: &Path) -> PathBuf {
    dir.join(".git").join("hooks")
}

/// Write one script per entry of `hooks` into `<dir>/.git/hooks`.
///
/// Existing scripts are overwritten. The hooks directory must already exist;
/// stops at the first failed write.
pub fn install_hooks(dir: &Path, hooks: &HookMapping, output: &Output) -> Result<Vec<PathBuf>> {
    let hooks_dir = hooks_dir(dir);
    let mut written = Vec::with_capacity(hooks.len());

    for (name, command) in hooks.iter() {
        let hook_path = hooks_dir.join(name);
        output.step(&format!("Writing hook: {}", hook_path.display()));
        write_hook(&hook_path, command)?;
        written.push(hook_path);
    }

    Ok(written)
}

fn write_hook(hook_path: &Path, command: &str) -> Result<()> {
    fs::write(hook_path, render_script(command))
        .with_context(|| format!("Failed to write hook file {}", hook_path.display()))?;

    // Git skips hooks that are not executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(hook_path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to set permissions on {}", hook_path.display()))?;
    }

    tracing::debug!("Wrote {}", hook_path.display());
    Ok(())
}

/// Every regular file in `<dir>/.git/hooks` as `(name, content)`, sorted by name.
/// A missing hooks directory yields an empty list.
pub fn list_hooks(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut hooks = Vec::new();
    for path in hook_files(dir)? {
        let content = fs::read(&path)
            .with_context(|| format!("Failed to read hook file {}", path.display()))?;
        hooks.push((file_name(&path), String::from_utf8_lossy(&content).into_owned()));
    }
    Ok(hooks)
}

/// Delete every regular file in `<dir>/.git/hooks`, returning the removed names
pub fn remove_hooks(dir: &Path, output: &Output) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    for path in hook_files(dir)? {
        let name = file_name(&path);
        output.step(&format!("Removing hook: {name}"));
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove hook file {}", path.display()))?;
        removed.push(name);
    }
    Ok(removed)
}

fn hook_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let hooks_dir = hooks_dir(dir);
    if !hooks_dir.is_dir() {
        tracing::debug!("No hooks directory at {}", hooks_dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(&hooks_dir)
        .with_context(|| format!("Failed to read {}", hooks_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    fn repo_with_hooks_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(hooks_dir(temp_dir.path())).unwrap();
        temp_dir
    }

    #[test]
    fn test_render_script() {
        assert_eq!(render_script("cargo test"), "#!/bin/sh\ncargo test\n");
    }

    #[test]
    fn test_install_then_list() {
        let repo = repo_with_hooks_dir();
        let mut hooks = HookMapping::builtin("hookmaster");
        hooks.insert("pre-commit", "cargo fmt --check");

        let written = install_hooks(repo.path(), &hooks, &quiet()).unwrap();
        assert_eq!(written.len(), 2);

        let listed = list_hooks(repo.path()).unwrap();
        assert_eq!(
            listed,
            vec![
                ("pre-commit".to_string(), "#!/bin/sh\ncargo fmt --check\n".to_string()),
                (
                    "prepare-commit-msg".to_string(),
                    "#!/bin/sh\nhookmaster prepare-commit-msg \"$@\"\n".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_install_overwrites_existing() {
        let repo = repo_with_hooks_dir();
        fs::write(hooks_dir(repo.path()).join("pre-commit"), "old").unwrap();

        let mut hooks = HookMapping::new();
        hooks.insert("pre-commit", "new");
        install_hooks(repo.path(), &hooks, &quiet()).unwrap();

        let content = fs::read_to_string(hooks_dir(repo.path()).join("pre-commit")).unwrap();
        assert_eq!(content, "#!/bin/sh\nnew\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let repo = repo_with_hooks_dir();
        install_hooks(repo.path(), &HookMapping::builtin("hookmaster"), &quiet()).unwrap();

        let mode = fs::metadata(hooks_dir(repo.path()).join("prepare-commit-msg"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_install_without_hooks_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".git")).unwrap();

        let result = install_hooks(temp_dir.path(), &HookMapping::builtin("hookmaster"), &quiet());
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_then_list_is_empty() {
        let repo = repo_with_hooks_dir();
        install_hooks(repo.path(), &HookMapping::builtin("hookmaster"), &quiet()).unwrap();
        fs::write(hooks_dir(repo.path()).join("pre-push.sample"), "#!/bin/sh\n").unwrap();

        let removed = remove_hooks(repo.path(), &quiet()).unwrap();
        assert_eq!(removed, ["pre-push.sample", "prepare-commit-msg"]);
        assert!(list_hooks(repo.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_hooks_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_hooks(temp_dir.path()).unwrap().is_empty());
    }
}
