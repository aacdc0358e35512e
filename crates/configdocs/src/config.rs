//! Configuration management for configdocs.
//!
//! Configuration is loaded with figment, layering a TOML config file and
//! environment variables over built-in defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the user config dir.
const APP_DIR_NAME: &str = "configdocs";

/// Default settings catalog file, relative to the working directory.
const CATALOG_FILE_NAME: &str = "settings.toml";

/// Prefix for environment overrides, e.g. `CONFIGDOCS_CATALOG_PATH`.
const ENV_PREFIX: &str = "CONFIGDOCS_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONFIGDOCS_`)
/// 2. TOML config file at `~/.config/configdocs/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings catalog configuration.
    pub catalog: CatalogConfig,
}

/// Where the settings catalog comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the settings catalog TOML file.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CATALOG_FILE_NAME),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A config file that does not exist is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Override the catalog path, e.g. from the command line.
    #[must_use]
    pub fn with_catalog(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.catalog.path = path;
        }
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "catalog.path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path of the settings catalog.
    #[must_use]
    pub fn catalog_path(&self) -> &Path {
        &self.catalog.path
    }
}
