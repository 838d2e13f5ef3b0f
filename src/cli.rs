//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// linkvault - a personal bookmark manager
#[derive(Parser, Debug)]
#[command(name = "linkvault")]
#[command(version)]
#[command(about = "Save, tag and search your bookmarks", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List links, optionally filtered
    List {
        /// Case-insensitive text matched against title, description and URL
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Only links in this category (id)
        #[arg(long)]
        category: Option<String>,

        /// Only links carrying any of these tags (id, repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Only favorite links
        #[arg(long)]
        favorites: bool,
    },

    /// Save a new link
    Add {
        /// URL to save (http or https)
        url: String,

        /// Link title
        #[arg(long, short = 't')]
        title: String,

        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Category id
        #[arg(long)]
        category: Option<String>,

        /// Existing tag id (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Create a tag with this name and attach it (repeatable)
        #[arg(long = "new-tag")]
        new_tags: Vec<String>,
    },

    /// Edit a link
    Update {
        /// Link id
        id: String,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long)]
        url: Option<String>,

        /// New description ("" clears it)
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// New category id ("" removes the category)
        #[arg(long)]
        category: Option<String>,

        /// Replace tags with these ids (repeatable)
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove all tags from the link
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete a link
    Remove {
        /// Link id
        id: String,
    },

    /// Toggle the favorite flag of a link
    Favorite {
        /// Link id
        id: String,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },

    /// Show link, category and tag counts
    Stats,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a category
    Add {
        name: String,

        /// Display color as #rrggbb (default: #6366f1)
        #[arg(long)]
        color: Option<String>,
    },

    /// List categories
    List,

    /// Delete a category; its links become uncategorized
    Remove {
        /// Category id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Create a tag
    Add { name: String },

    /// List tags
    List,

    /// Delete a tag and detach it from all links
    Remove {
        /// Tag id
        id: String,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// `update` 的标签参数：`--clear-tags` 清空，给出 `--tag` 则替换，否则保持不变
    pub fn update_tag_ids(tags: Vec<String>, clear_tags: bool) -> Option<Vec<String>> {
        if clear_tags {
            Some(Vec::new())
        } else if tags.is_empty() {
            None
        } else {
            Some(tags)
        }
    }
}
