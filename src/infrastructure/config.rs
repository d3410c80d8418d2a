//! Configuration management

use crate::error::{Result, RotaError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// What to do with a list whose anchor lies after the current week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FutureAnchorPolicy {
    /// Treat as zero elapsed weeks and log a warning
    #[default]
    Clamp,
    /// Refuse to show or edit the list
    Reject,
}

impl FromStr for FutureAnchorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(FutureAnchorPolicy::Clamp),
            "reject" => Ok(FutureAnchorPolicy::Reject),
            _ => Err(format!(
                "Invalid future_anchor policy: '{}'. Valid values are: clamp, reject",
                s
            )),
        }
    }
}

impl fmt::Display for FutureAnchorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FutureAnchorPolicy::Clamp => write!(f, "clamp"),
            FutureAnchorPolicy::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub future_anchor: FutureAnchorPolicy,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(created: DateTime<Utc>) -> Self {
        Config {
            future_anchor: FutureAnchorPolicy::default(),
            created,
        }
    }

    /// Load config from .rota/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".rota").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RotaError::NotRotaDirectory(path.to_path_buf())
            } else {
                RotaError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| RotaError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .rota/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let rota_dir = path.join(".rota");
        let config_path = rota_dir.join("config.toml");

        if !rota_dir.exists() {
            fs::create_dir(&rota_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
