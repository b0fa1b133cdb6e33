//! Configuration types and parsing for preen.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from preen.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing migration scripts
    #[serde(default = "default_folder")]
    pub folder: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Emit run logs (set false to silence the runner entirely)
    #[serde(default = "default_true")]
    pub logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            database: DatabaseConfig::default(),
            logging: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Migrations folder resolved against the project root.
    pub fn folder_absolute(&self, root: &Path) -> PathBuf {
        let folder = Path::new(&self.folder);
        if folder.is_absolute() {
            folder.to_path_buf()
        } else {
            root.join(folder)
        }
    }

    /// Reject values that cannot possibly work.
    pub fn validate(&self) -> CoreResult<()> {
        if self.folder.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'folder' must not be empty".to_string(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'database.path' must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database path (file-based, or :memory: for a throwaway run)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_folder() -> String {
    "migrations".to_string()
}

fn default_db_path() -> String {
    "preen.duckdb".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
