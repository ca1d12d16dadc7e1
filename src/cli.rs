use clap::{Parser, Subcommand};

use crate::types::ProjectId;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse, save and manage projects in a remote catalog")]
#[command(version)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output(&self) -> OutputOptions {
        OutputOptions { json: self.json }
    }
}

/// Flags shared by every command that prints results
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, optionally filtered by a search term
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive substring matched against title, description, category and author
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Save projects into the saved collection
    Save {
        /// Project IDs
        #[arg(required = true)]
        ids: Vec<ProjectId>,
    },

    /// Delete projects from the catalog
    #[command(visible_alias = "rm")]
    Delete {
        /// Project IDs
        #[arg(required = true)]
        ids: Vec<ProjectId>,
    },

    /// Manage saved projects
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },

    /// Add a new project to the catalog
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        author: String,

        /// Link to the project's preview image
        #[arg(long = "image-url")]
        image_url: String,
    },

    /// Show every project as a read-only portfolio
    Portfolio,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum SavedAction {
    /// List saved projects
    #[command(visible_alias = "ls")]
    List,

    /// Delete saved projects
    #[command(visible_alias = "rm")]
    Delete {
        /// Saved project IDs
        #[arg(required = true)]
        ids: Vec<ProjectId>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api.base_url, notification.dismiss_after_ms)
        key: String,
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
}
