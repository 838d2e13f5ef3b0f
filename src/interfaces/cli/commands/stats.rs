use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn show_stats(ctx: &CliContext) -> Result<(), CliError> {
    let stats = ctx.links.stats(&ctx.user_id).await?;

    println!("{}", "Bookmark statistics:".bold().green());
    println!("  Links:      {}", stats.total_links.to_string().cyan());
    println!("  Favorites:  {}", stats.favorite_links.to_string().yellow());
    println!("  Categories: {}", stats.total_categories.to_string().magenta());
    println!("  Tags:       {}", stats.total_tags.to_string().blue());
    Ok(())
}
