use crate::error::{PublishError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Represents the complete configuration for assembly-publish.
///
/// Contains the metadata file location, remote and tag naming settings, the
/// caller-level mode alias table, and tag history report options.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_aliases")]
    pub aliases: HashMap<String, String>,

    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_metadata_file() -> String {
    "Properties/AssemblyInfo.cs".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Returns the default mode alias table.
///
/// Only "patch" ships by default; historical aliases varied too much between
/// projects to bake in, so anything else belongs in user configuration.
fn default_aliases() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("patch".to_string(), "revision".to_string());
    map
}

/// Configuration for the tag history report.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryConfig {
    #[serde(default = "default_history_count")]
    pub count: usize,

    #[serde(default = "default_release_labels")]
    pub release_labels: Vec<String>,
}

fn default_history_count() -> usize {
    10
}

/// Returns the tag annotation labels highlighted as releases in the report.
fn default_release_labels() -> Vec<String> {
    vec!["production".to_string(), "development".to_string()]
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            count: default_history_count(),
            release_labels: default_release_labels(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metadata_file: default_metadata_file(),
            remote: default_remote(),
            tag_pattern: default_tag_pattern(),
            aliases: default_aliases(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    /// Resolve a caller-supplied mode name through the alias table.
    ///
    /// Returns the canonical name if an alias matches; unrecognized names pass
    /// through untouched so the core can reject them with its own error.
    pub fn resolve_mode<'a>(&'a self, mode: &'a str) -> &'a str {
        self.aliases.get(mode).map(|s| s.as_str()).unwrap_or(mode)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `assemblypublish.toml` in current directory
/// 3. `.assemblypublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./assemblypublish.toml").exists() {
        fs::read_to_string("./assemblypublish.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".assemblypublish.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| PublishError::config(e.to_string()))?;
    Ok(config)
}
