use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the per-repository hook configuration file
pub const CONFIG_FILE_NAME: &str = "githooks.toml";

/// Hook name → shell command, in insertion order. Inserting an existing name
/// replaces its command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct HookMapping(IndexMap<String, String>);

impl HookMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The hooks installed into every repository regardless of configuration
    pub fn builtin(executable: &str) -> Self {
        let mut hooks = Self::new();
        hooks.insert(
            "prepare-commit-msg",
            format!("{executable} prepare-commit-msg \"$@\""),
        );
        hooks
    }

    /// Parse the contents of a `githooks.toml`
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `<dir>/githooks.toml`. A missing file is `Ok(None)`.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, dir.display());
            return Ok(None);
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let hooks = Self::parse(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!("Loaded {} hook(s) from {}", hooks.len(), path.display());
        Ok(Some(hooks))
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        command: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(name.into(), command.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, command)| (name.as_str(), command.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_forwards_arguments() {
        let hooks = HookMapping::builtin("hookmaster");
        assert_eq!(hooks.len(), 1);
        assert_eq!(
            hooks.get("prepare-commit-msg"),
            Some("hookmaster prepare-commit-msg \"$@\"")
        );
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let hooks = HookMapping::parse(
            r#"
pre-push = "cargo test"
pre-commit = "cargo fmt --check"
commit-msg = "echo $1"
"#,
        )
        .unwrap();

        let names: Vec<_> = hooks.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["pre-push", "pre-commit", "commit-msg"]);
        assert_eq!(hooks.get("pre-commit"), Some("cargo fmt --check"));
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut hooks = HookMapping::builtin("hookmaster");
        let previous = hooks.insert("prepare-commit-msg", "echo custom");

        assert!(previous.is_some());
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks.get("prepare-commit-msg"), Some("echo custom"));
    }

    #[test]
    fn test_parse_rejects_non_string_values() {
        assert!(HookMapping::parse("pre-commit = 3").is_err());
        assert!(HookMapping::parse("[pre-commit]\ncommand = \"x\"").is_err());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(HookMapping::load(temp_dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config, "pre-commit = \"unterminated").unwrap();

        let err = HookMapping::load(temp_dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_present_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "pre-commit = \"make lint\"\n").unwrap();

        let hooks = HookMapping::load(temp_dir.path()).unwrap().unwrap();
        assert_eq!(hooks.get("pre-commit"), Some("make lint"));
    }
}
