use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn toggle_favorite(ctx: &CliContext, id: String) -> Result<(), CliError> {
    let link = ctx.links.toggle_favorite(&ctx.user_id, &id).await?;
    if link.is_favorite {
        println!("{} Added to favorites: {}", "★".bold().yellow(), link.title);
    } else {
        println!("{} Removed from favorites: {}", "☆".bold(), link.title);
    }
    Ok(())
}
