//! Configuration management for casenumber.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable to override the default case prefix
const PREFIX_ENV: &str = "CASENUMBER_PREFIX";
/// Project config file names, checked in order in each directory
const PROJECT_CONFIG_NAMES: &[&str] = &["casenumber.yaml", "casenumber.yml"];
/// User-level config file under the home directory
const USER_CONFIG_NAME: &str = ".casenumber.yaml";

/// Settings read from `casenumber.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Prefix used when no template variable is given
    #[serde(default)]
    pub default_prefix: Option<String>,
    /// Replace control characters in prefixes with spaces
    #[serde(default)]
    pub sanitize_prefix: bool,
}

impl FileConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        // An empty file parses as YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Configuration for casenumber operations.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Prefix used when the caller supplies none
    pub default_prefix: Option<String>,
    /// Whether prefixes are stripped of control characters
    pub sanitize_prefix: bool,
    /// Path of the config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Looks for a project config from the cwd upwards, then the user config
    /// in the home directory. `CASENUMBER_PREFIX` overrides the prefix.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config_path = Self::find_project_config(&cwd).or_else(Self::find_user_config);

        let mut config = Self::from_file(config_path)?;

        if let Ok(prefix) = std::env::var(PREFIX_ENV) {
            if !prefix.trim().is_empty() {
                config.default_prefix = Some(prefix);
            }
        }

        Ok(config)
    }

    /// Build configuration from an optional config file, without consulting
    /// the environment.
    pub fn from_file(config_path: Option<PathBuf>) -> Result<Self> {
        let file = match config_path.as_deref() {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            default_prefix: file.default_prefix,
            sanitize_prefix: file.sanitize_prefix,
            config_path,
        })
    }

    /// Apply the configured prefix policy.
    pub fn prepare_prefix(&self, prefix: &str) -> String {
        if self.sanitize_prefix {
            sanitize_prefix(prefix)
        } else {
            prefix.to_string()
        }
    }

    /// Find project config file (casenumber.yaml) by traversing up from `start`
    pub fn find_project_config(start: &Path) -> Option<PathBuf> {
        let mut dir = start;
        loop {
            for name in PROJECT_CONFIG_NAMES {
                let config_path = dir.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }

        None
    }

    fn find_user_config() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(USER_CONFIG_NAME);
        path.exists().then_some(path)
    }
}

/// Replace control characters (CR, LF, tabs, ...) with single spaces.
pub fn sanitize_prefix(prefix: &str) -> String {
    prefix
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
