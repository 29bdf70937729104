use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings of the tool itself.
///
/// Layered from built-in defaults, the user config file and `HOOKMASTER_*`
/// environment variables, in increasing priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Program written into the built-in hook scripts
    pub executable: String,

    /// Interpreter used to run configured hook commands
    pub shell: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executable: crate::PKG_NAME.to_string(),
            shell: "sh".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::figment()
            .extract()
            .context("Failed to load hookmaster settings")
    }

    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = Self::user_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed("HOOKMASTER_"))
    }

    /// `~/.config/hookmaster/config.toml` on Linux, the platform equivalent elsewhere
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hookmaster").join("config.toml"))
    }
}
