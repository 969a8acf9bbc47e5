//! Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::LanternResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub git_repositories: GitRepositoriesConfig,
}

/// Which providers contribute to the option list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub clock: bool,
    pub system_monitor: bool,
    pub open_windows: bool,
    pub applications: bool,
    pub git_repositories: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitRepositoriesConfig {
    /// Directory to scan for repositories. Defaults to the home directory.
    pub root: Option<String>,
    /// Command used to open a repository, e.g. "code" or "codium --wait".
    pub editor: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            clock: true,
            system_monitor: true,
            open_windows: true,
            applications: true,
            git_repositories: true,
        }
    }
}

impl Default for GitRepositoriesConfig {
    fn default() -> Self {
        Self {
            root: None,
            editor: "code".to_string(),
        }
    }
}

impl GitRepositoriesConfig {
    /// The scan root with `~` expanded, falling back to the home directory.
    ///
    /// The root reaches the provider as a constructor argument; nothing
    /// below the configuration layer consults the environment for it.
    pub fn resolved_root(&self) -> Option<PathBuf> {
        match &self.root {
            Some(root) => Some(PathBuf::from(shellexpand::tilde(root).into_owned())),
            None => dirs::home_dir(),
        }
    }
}

impl Config {
    /// Path of the config file: `~/.config/lantern/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lantern").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable. A malformed file is logged and ignored rather
    /// than aborting startup.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> LanternResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_all_providers() {
        let config = Config::default();
        assert!(config.providers.clock);
        assert!(config.providers.applications);
        assert!(config.providers.git_repositories);
        assert_eq!(config.git_repositories.editor, "code");
    }

    #[test]
    fn test_partial_file_keeps_defaults_elsewhere() {
        let config = Config::from_toml(
            r#"
            [providers]
            open_windows = false

            [git_repositories]
            editor = "codium"
            "#,
        )
        .unwrap();

        assert!(!config.providers.open_windows);
        assert!(config.providers.clock);
        assert_eq!(config.git_repositories.editor, "codium");
        assert_eq!(config.git_repositories.root, None);
    }

    #[test]
    fn test_configured_root_expands_tilde() {
        let config = Config::from_toml(
            r#"
            [git_repositories]
            root = "~/src"
            "#,
        )
        .unwrap();

        let root = config.git_repositories.resolved_root().unwrap();
        assert!(root.ends_with("src"));
        assert!(!root.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(Config::from_toml("providers = 3").is_err());
    }
}
