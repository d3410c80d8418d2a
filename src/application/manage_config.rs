//! Config management use case

use crate::error::{Result, RotaError};
use crate::infrastructure::{Config, FileSystemStore, FutureAnchorPolicy};
use std::str::FromStr;

/// Service for managing store configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "future_anchor" => Ok(config.future_anchor.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(RotaError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: future_anchor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "future_anchor" => {
                config.future_anchor =
                    FutureAnchorPolicy::from_str(value).map_err(RotaError::Config)?;
            }
            "created" => {
                return Err(RotaError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(RotaError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: future_anchor",
                    key
                )));
            }
        }

        self.store.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
