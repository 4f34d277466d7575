//! Configuration file support for caffcheck.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/caffcheck/config.toml`.
//! It carries the two policy surfaces the engine treats as data: where the
//! item catalog comes from, and the age-bracket threshold table.

use crate::catalog::get_default_catalog;
use crate::policy::{default_brackets, BracketRule};
use crate::{Catalog, Error, LimitPolicy, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Catalog source configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to a JSON item catalog; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Threshold policy configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Age-bracket table; replaced wholesale when set
    #[serde(default = "default_brackets")]
    pub brackets: Vec<BracketRule>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            brackets: default_brackets(),
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("caffcheck").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build the validated limit policy from the configured bracket table
    pub fn limit_policy(&self) -> Result<LimitPolicy> {
        LimitPolicy::new(self.policy.brackets.clone())
    }

    /// Load the configured catalog, falling back to the built-in one
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load_from_path(path),
            None => Ok(get_default_catalog().clone()),
        }
    }
}
