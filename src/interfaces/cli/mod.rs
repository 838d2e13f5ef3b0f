//! CLI interface module
//!
//! Runs one parsed [`Commands`] against the configured store and prints the
//! result.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{CategoryCommands, Commands, ConfigCommands, TagCommands};
use crate::errors::VaultError;
use crate::event::EventBus;
use crate::services::{CategoryService, LinkService, TagService};
use crate::storage::{BookmarkStore, StorageFactory};
use commands::{
    add_category, add_link, add_tag, config_generate, list_categories, list_links, list_tags,
    remove_category, remove_link, remove_tag, show_stats, toggle_favorite, update_link,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ValidationError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ValidationError(msg) => format!("Invalid input: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ValidationError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<VaultError> for CliError {
    fn from(err: VaultError) -> Self {
        match err {
            VaultError::Validation(msg) | VaultError::InvalidUrl(msg) => {
                CliError::ValidationError(msg)
            }
            VaultError::NotFound(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Everything a command needs: services over one shared store, scoped to the
/// configured user.
pub struct CliContext {
    pub user_id: String,
    pub store: Arc<dyn BookmarkStore>,
    pub events: EventBus,
    pub links: LinkService,
    pub categories: CategoryService,
    pub tags: TagService,
}

impl CliContext {
    pub fn new(store: Arc<dyn BookmarkStore>, user_id: impl Into<String>) -> Self {
        let events = EventBus::default();
        Self {
            user_id: user_id.into(),
            links: LinkService::new(store.clone(), events.clone()),
            categories: CategoryService::new(store.clone(), events.clone()),
            tags: TagService::new(store.clone(), events.clone()),
            store,
            events,
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Generate doesn't need a database connection
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return config_generate(output_path, force).await;
    }

    let storage = StorageFactory::create()
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;
    let ctx = CliContext::new(storage, crate::config::current_user_id());

    execute(&ctx, cmd).await
}

/// 在给定上下文中执行命令（测试中可传入临时数据库）
pub async fn execute(ctx: &CliContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::List {
            query,
            category,
            tags,
            favorites,
        } => list_links(ctx, query, category, tags, favorites).await,

        Commands::Add {
            url,
            title,
            description,
            category,
            tags,
            new_tags,
        } => add_link(ctx, url, title, description, category, tags, new_tags).await,

        Commands::Update {
            id,
            title,
            url,
            description,
            category,
            tags,
            clear_tags,
        } => {
            let tag_ids = Commands::update_tag_ids(tags, clear_tags);
            update_link(ctx, id, title, url, description, category, tag_ids).await
        }

        Commands::Remove { id } => remove_link(ctx, id).await,

        Commands::Favorite { id } => toggle_favorite(ctx, id).await,

        Commands::Category { action } => match action {
            CategoryCommands::Add { name, color } => add_category(ctx, name, color).await,
            CategoryCommands::List => list_categories(ctx).await,
            CategoryCommands::Remove { id } => remove_category(ctx, id).await,
        },

        Commands::Tag { action } => match action {
            TagCommands::Add { name } => add_tag(ctx, name).await,
            TagCommands::List => list_tags(ctx).await,
            TagCommands::Remove { id } => remove_tag(ctx, id).await,
        },

        Commands::Stats => show_stats(ctx).await,

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force).await,
    }
}
