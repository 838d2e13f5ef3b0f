//! Category management commands

use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn add_category(
    ctx: &CliContext,
    name: String,
    color: Option<String>,
) -> Result<(), CliError> {
    let category = ctx
        .categories
        .create_category(&ctx.user_id, &name, color.as_deref())
        .await?;

    println!(
        "{} Added category: {} {} ({})",
        "✓".bold().green(),
        category.name.bold(),
        category.color.dimmed(),
        category.id.magenta()
    );
    Ok(())
}

pub async fn list_categories(ctx: &CliContext) -> Result<(), CliError> {
    let categories = ctx.categories.list_categories(&ctx.user_id).await?;

    if categories.is_empty() {
        println!("{} No categories yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Categories:".bold().green());
    for category in &categories {
        println!(
            "  {} {} ({})",
            category.name.bold(),
            category.color.dimmed(),
            category.id.dimmed()
        );
    }
    Ok(())
}

pub async fn remove_category(ctx: &CliContext, id: String) -> Result<(), CliError> {
    ctx.categories.delete_category(&ctx.user_id, &id).await?;
    println!(
        "{} Deleted category: {} (its links are now uncategorized)",
        "✓".bold().green(),
        id.magenta()
    );
    Ok(())
}
