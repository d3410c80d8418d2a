//! Error types for rota

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the rota application
#[derive(Debug, Error)]
pub enum RotaError {
    #[error("Not a rota directory: {0}")]
    NotRotaDirectory(PathBuf),

    #[error("List {0} not found")]
    ListNotFound(String),

    #[error("Invalid rotation anchor: {0}")]
    InvalidAnchor(String),

    #[error("Rotation anchor {anchor} is later than the current week ({current})")]
    FutureAnchor { anchor: NaiveDate, current: NaiveDate },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Person already in list: {0}")]
    DuplicatePerson(String),

    #[error("No person at position {index} (list has {len} entries)")]
    InvalidPosition { index: usize, len: usize },

    #[error("Invalid date or time: {0}")]
    InvalidDateTime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RotaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RotaError::NotRotaDirectory(_) => 2,
            RotaError::ListNotFound(_) => 3,
            RotaError::InvalidAnchor(_) | RotaError::FutureAnchor { .. } => 4,
            RotaError::DuplicatePerson(_)
            | RotaError::InvalidPosition { .. }
            | RotaError::InvalidName(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RotaError::NotRotaDirectory(path) => {
                format!(
                    "Not a rota directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'rota init' in this directory to create a new store\n\
                    • Navigate to an existing rota directory\n\
                    • Set ROTA_ROOT environment variable to your store path",
                    path.display()
                )
            }
            RotaError::ListNotFound(id) => {
                format!(
                    "List {} not found\n\n\
                    Suggestions:\n\
                    • Use 'rota lists' to see the available lists and their ids\n\
                    • Create a new list with 'rota create <NAME>'",
                    id
                )
            }
            RotaError::InvalidAnchor(msg) => {
                format!(
                    "Invalid rotation anchor: {}\n\n\
                    The 'lastRotation' field must be a Monday written as YYYY-MM-DD\n\
                    Example: \"lastRotation\": \"2025-01-13\"",
                    msg
                )
            }
            RotaError::FutureAnchor { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the 'lastRotation' field of the list file\n\
                    • Allow future anchors: rota config future_anchor clamp",
                    self
                )
            }
            RotaError::InvalidDateTime(input) => {
                format!(
                    "Invalid date or time: '{}'\n\n\
                    Expected an RFC 3339 timestamp or a YYYY-MM-DD date\n\
                    Examples: 2025-01-17, 2025-01-17T09:30:00Z",
                    input
                )
            }
            RotaError::Config(msg) => {
                if msg.contains("future_anchor") {
                    format!(
                        "{}\n\n\
                        Valid values: clamp, reject\n\
                        Example: rota config future_anchor reject",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RotaError
pub type Result<T> = std::result::Result<T, RotaError>;
