//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn remove_link(ctx: &CliContext, id: String) -> Result<(), CliError> {
    ctx.links.delete_link(&ctx.user_id, &id).await?;
    println!("{} Deleted link: {}", "✓".bold().green(), id.magenta());
    Ok(())
}
