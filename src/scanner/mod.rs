//! Project tree scanning
//!
//! Finds every git repository root and every `githooks.toml` below a directory.
//! The walk has no exclusions: it descends into `.git` directories and nested
//! repositories alike, so a vendored checkout inside another one is found too.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::CONFIG_FILE_NAME;

/// Directories discovered below a scan root, each list sorted and deduplicated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectScan {
    /// Directories containing a `.git` entry
    pub repositories: Vec<PathBuf>,
    /// Directories containing a `githooks.toml` file
    pub config_dirs: Vec<PathBuf>,
}

impl ProjectScan {
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty() && self.config_dirs.is_empty()
    }
}

/// Walk the whole tree below `root`
pub fn scan(root: &Path) -> ProjectScan {
    let mut result = ProjectScan::default();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let Some(parent) = entry.path().parent() else {
            continue;
        };

        let name = entry.file_name();
        if name == ".git" {
            tracing::trace!("Found repository at {}", parent.display());
            result.repositories.push(parent.to_path_buf());
        } else if name == CONFIG_FILE_NAME && entry.file_type().is_file() {
            tracing::trace!("Found {} in {}", CONFIG_FILE_NAME, parent.display());
            result.config_dirs.push(parent.to_path_buf());
        }
    }

    result.repositories.sort();
    result.repositories.dedup();
    result.config_dirs.sort();
    result.config_dirs.dedup();

    tracing::debug!(
        "Scanned {}: {} repositories, {} config files",
        root.display(),
        result.repositories.len(),
        result.config_dirs.len()
    );
    result
}
