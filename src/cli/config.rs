// ABOUTME: Configuration management for the templar application
// ABOUTME: Handles loading configuration from YAML files with sensible defaults

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "templar.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Variables merged under any supplied on the command line
    #[serde(default)]
    pub default_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "full".to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist; otherwise `templar.yaml` in the
    /// working directory is used when present, and defaults apply when it is
    /// not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Merge variables over the configured defaults, supplied values win
    pub fn merge_variables(&self, supplied: HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = self.default_vars.clone();
        merged.extend(supplied);
        merged
    }
}
