//! Add link command

use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};
use crate::services::CreateLinkRequest;

pub async fn add_link(
    ctx: &CliContext,
    url: String,
    title: String,
    description: Option<String>,
    category: Option<String>,
    mut tag_ids: Vec<String>,
    new_tags: Vec<String>,
) -> Result<(), CliError> {
    for name in new_tags {
        let tag = ctx.tags.create_tag(&ctx.user_id, &name).await?;
        println!(
            "{} Created tag: {} ({})",
            "ℹ".bold().blue(),
            tag.name.cyan(),
            tag.id.dimmed()
        );
        tag_ids.push(tag.id);
    }

    let link = ctx
        .links
        .create_link(
            &ctx.user_id,
            CreateLinkRequest {
                title,
                url,
                description,
                category_id: category,
                tag_ids,
            },
        )
        .await?;

    println!(
        "{} Added link: {} -> {}",
        "✓".bold().green(),
        link.title.bold(),
        link.url.blue().underline()
    );
    println!("  id: {}", link.id.magenta());
    Ok(())
}
