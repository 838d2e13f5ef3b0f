//! List links command

use colored::Colorize;

use super::format_link;
use crate::dashboard::DashboardSession;
use crate::filter::FilterCriteria;
use crate::interfaces::cli::{CliContext, CliError};

pub async fn list_links(
    ctx: &CliContext,
    query: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    favorites_only: bool,
) -> Result<(), CliError> {
    let mut session = DashboardSession::new(ctx.store.clone(), &ctx.events, ctx.user_id.clone());
    session.load().await?;

    let dashboard = session.dashboard_mut();
    dashboard.set_criteria(FilterCriteria {
        query: query.unwrap_or_default(),
        category,
        tags: tags.into_iter().collect(),
        favorites_only,
    });

    if let Some(empty) = dashboard.empty_state() {
        println!("{} {}", "ℹ".bold().blue(), empty.message());
        return Ok(());
    }

    for link in dashboard.view() {
        println!("  {}", format_link(link));
        if let Some(description) = &link.description {
            println!("      {}", description.dimmed());
        }
    }
    println!();

    let shown = dashboard.view().len();
    let total = dashboard.links().len();
    if shown == total {
        println!(
            "{} Total {} links",
            "ℹ".bold().blue(),
            total.to_string().green()
        );
    } else {
        println!(
            "{} Showing {} of {} links",
            "ℹ".bold().blue(),
            shown.to_string().green(),
            total
        );
    }
    Ok(())
}
