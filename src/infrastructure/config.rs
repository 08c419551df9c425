//! Journal configuration management

use crate::domain::Period;
use crate::error::{MemoirError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default analytics lookback in days; 0 means all time
    pub default_period: u32,
    /// Where exported documents land; None falls back to the documents folder
    pub export_dir: Option<PathBuf>,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_period: 90,
            export_dir: None,
            created: Utc::now(),
        }
    }

    /// Load config from .memoir/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".memoir").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MemoirError::NotJournalDirectory(path.to_path_buf())
            } else {
                MemoirError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MemoirError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .memoir/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let memoir_dir = path.join(".memoir");
        let config_path = memoir_dir.join("config.toml");

        if !memoir_dir.exists() {
            fs::create_dir(&memoir_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// The configured default period as a domain value
    pub fn period(&self) -> Period {
        if self.default_period == 0 {
            Period::AllTime
        } else {
            Period::Days(self.default_period)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
