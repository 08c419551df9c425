//! Config management use case

use crate::domain::Period;
use crate::error::{MemoirError, Result};
use crate::infrastructure::{Config, FileJournalStore, JournalStore};
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileJournalStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileJournalStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "default_period" => Ok(config.default_period.to_string()),
            "export_dir" => Ok(config
                .export_dir
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MemoirError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_period, export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "default_period" => {
                let period = Period::parse(value)
                    .map_err(|_| MemoirError::Config(format!("Invalid default_period: {}", value)))?;
                config.default_period = period.days();
            }
            "export_dir" => {
                config.export_dir = Some(PathBuf::from(value));
            }
            "created" => {
                return Err(MemoirError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MemoirError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_period, export_dir",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
