//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rota")]
#[command(about = "Weekly rotation lists: who is on duty this week", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new rota store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new rotation list
    Create {
        /// Display name of the list (e.g., Cleaners, Standup)
        name: String,
    },

    /// Show all lists
    Lists,

    /// Show a list with this week's pick, rotating it if weeks have passed
    Show {
        /// List id
        id: String,
    },

    /// Add a person to the end of a list
    Add {
        /// List id
        id: String,

        /// Name of the person
        person: String,
    },

    /// Remove a person from a list
    Remove {
        /// List id
        id: String,

        /// Position in the queue (0 is the current pick)
        index: usize,
    },

    /// Move a person one place up or down
    Move {
        /// List id
        id: String,

        /// Position in the queue (0 is the current pick)
        index: usize,

        /// Direction (up, down)
        direction: String,
    },

    /// Delete a list
    Delete {
        /// List id
        id: String,
    },

    /// Show the ISO week for today or a given date
    Week {
        /// Date as YYYY-MM-DD (default: today, UTC)
        date: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
