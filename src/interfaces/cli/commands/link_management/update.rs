//! Update link command

use colored::Colorize;

use super::format_link;
use crate::interfaces::cli::{CliContext, CliError};
use crate::services::UpdateLinkRequest;

pub async fn update_link(
    ctx: &CliContext,
    id: String,
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    category: Option<String>,
    tag_ids: Option<Vec<String>>,
) -> Result<(), CliError> {
    let req = UpdateLinkRequest {
        title,
        url,
        description,
        category_id: category,
        tag_ids,
        is_favorite: None,
    };
    if req.is_empty() {
        return Err(CliError::CommandError(
            "Nothing to update; pass at least one field".to_string(),
        ));
    }

    let link = ctx.links.update_link(&ctx.user_id, &id, req).await?;

    println!("{} Updated link:", "✓".bold().green());
    println!("  {}", format_link(&link));
    Ok(())
}
