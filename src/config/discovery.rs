use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Whether `dir` holds a `.git` entry (directory for normal clones, file for
/// worktrees and submodules)
fn is_repository_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Find the nearest directory at or above `start` that is a repository root.
///
/// Starts from the current working directory when `start` is `None` and
/// returns `Ok(None)` once the filesystem root has been checked.
pub fn find_repository_root(start: Option<&Path>) -> Result<Option<PathBuf>> {
    let start = match start {
        Some(path) => {
            let absolute = std::path::absolute(path)
                .with_context(|| format!("Failed to resolve {}", path.display()))?;
            absolute.canonicalize().unwrap_or(absolute)
        }
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    Ok(ascend(&start, None))
}

/// Walk from `start` towards the filesystem root, checking `ceiling` last
/// when given.
fn ascend(start: &Path, ceiling: Option<&Path>) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if is_repository_root(dir) {
            tracing::debug!("Repository root: {}", dir.display());
            return Some(dir.to_path_buf());
        }
        if ceiling == Some(dir) {
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    tracing::debug!("No repository above {}", start.display());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_nearest_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let outer = temp_dir.path().canonicalize().unwrap();
        let inner = outer.join("vendor/lib");
        let deep = inner.join("src/a/b/c");
        fs::create_dir_all(outer.join(".git")).unwrap();
        fs::create_dir_all(inner.join(".git")).unwrap();
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(find_repository_root(Some(&deep)).unwrap(), Some(inner.clone()));
        assert_eq!(find_repository_root(Some(&inner)).unwrap(), Some(inner));
        assert_eq!(
            find_repository_root(Some(&outer.join("vendor"))).unwrap(),
            Some(outer)
        );
    }

    #[test]
    fn test_git_file_counts_as_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::write(root.join(".git"), "gitdir: /elsewhere/.git/worktrees/x\n").unwrap();
        fs::create_dir_all(root.join("sub")).unwrap();

        assert_eq!(find_repository_root(Some(&root.join("sub"))).unwrap(), Some(root));
    }

    #[test]
    fn test_not_found_without_git_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let ceiling = temp_dir.path().canonicalize().unwrap();
        let deep = ceiling.join("x/y/z");
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(ascend(&deep, Some(&ceiling)), None);
    }

    #[test]
    fn test_ceiling_itself_is_checked() {
        let temp_dir = TempDir::new().unwrap();
        let ceiling = temp_dir.path().canonicalize().unwrap();
        let deep = ceiling.join("x/y");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir_all(ceiling.join(".git")).unwrap();

        assert_eq!(ascend(&deep, Some(&ceiling)), Some(ceiling));
    }

    #[cfg(unix)]
    #[test]
    fn test_ascent_stops_at_filesystem_root() {
        // Without a ceiling the walk ends at `/` whatever it finds on the way
        let root = Path::new("/");
        let expected = is_repository_root(root).then(|| root.to_path_buf());
        assert_eq!(ascend(root, None), expected);
    }
}
