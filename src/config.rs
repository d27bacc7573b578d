use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::site::types::Version;

/// Identifier of the default docs plugin instance
pub const DEFAULT_PLUGIN_ID: &str = "default";

/// Site configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Docs plugin instances, keyed by plugin id
    pub docs: IndexMap<String, DocsPluginConfig>,
}

/// Configuration of a single docs plugin instance
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsPluginConfig {
    /// Versions in display order
    pub versions: Vec<Version>,
    /// Name of the latest version; defaults to the first configured version
    pub latest_version: Option<String>,
}

/// Error reading or parsing a site configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteConfig {
    /// Load a site configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Returns the path to the data directory for docnav.
/// Uses $XDG_DATA_HOME/docnav if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/docnav,
/// or ./docnav if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the preferences database file.
pub fn db_path() -> PathBuf {
    data_dir().join("preferences.db")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("docnav")
}
