use colored::Colorize;

use crate::storage::Link;

/// 单行展示：★ 标题 -> URL [分类] #标签 (id)
pub fn format_link(link: &Link) -> String {
    let mut parts = Vec::with_capacity(5);

    let marker = if link.is_favorite { "★" } else { " " };
    parts.push(format!(
        "{} {} -> {}",
        marker.yellow(),
        link.title.bold(),
        link.url.blue().underline()
    ));

    if let Some(category) = &link.category {
        parts.push(format!("[{}]", category.name).magenta().to_string());
    }

    if !link.tags.is_empty() {
        let tags: Vec<String> = link.tags.iter().map(|t| format!("#{}", t.name)).collect();
        parts.push(tags.join(" ").cyan().to_string());
    }

    parts.push(format!("({})", link.id).dimmed().to_string());
    parts.join(" ")
}
