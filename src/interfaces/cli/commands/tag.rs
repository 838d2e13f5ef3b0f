//! Tag management commands

use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn add_tag(ctx: &CliContext, name: String) -> Result<(), CliError> {
    let tag = ctx.tags.create_tag(&ctx.user_id, &name).await?;
    println!(
        "{} Added tag: {} ({})",
        "✓".bold().green(),
        format!("#{}", tag.name).cyan(),
        tag.id.magenta()
    );
    Ok(())
}

pub async fn list_tags(ctx: &CliContext) -> Result<(), CliError> {
    let tags = ctx.tags.list_tags(&ctx.user_id).await?;

    if tags.is_empty() {
        println!("{} No tags yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Tags:".bold().green());
    for tag in &tags {
        println!("  {} ({})", format!("#{}", tag.name).cyan(), tag.id.dimmed());
    }
    Ok(())
}

pub async fn remove_tag(ctx: &CliContext, id: String) -> Result<(), CliError> {
    ctx.tags.delete_tag(&ctx.user_id, &id).await?;
    println!("{} Deleted tag: {}", "✓".bold().green(), id.magenta());
    Ok(())
}
