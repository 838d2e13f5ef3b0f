use std::sync::Arc;

use crate::filter::{FilterCriteria, filter_links};
use crate::storage::models::Link;

/// 过滤结果为空时展示的提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// 用户还没有任何链接
    NoLinks,
    /// 有链接，但没有满足当前条件的
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoLinks => "No links yet",
            EmptyState::NoMatches => "No links match your filters",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    links: Arc<[Link]>,
    criteria: FilterCriteria,
    view: Vec<Link>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Dashboard {
    pub fn new(links: Vec<Link>) -> Self {
        Self::with_criteria(links, FilterCriteria::default())
    }

    pub fn with_criteria(links: Vec<Link>, criteria: FilterCriteria) -> Self {
        let mut dashboard = Self {
            links: links.into(),
            criteria,
            view: Vec::new(),
        };
        dashboard.recompute();
        dashboard
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// 当前展示的链接
    pub fn view(&self) -> &[Link] {
        &self.view
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.links.is_empty() {
            Some(EmptyState::NoLinks)
        } else if self.view.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    /// 整体替换链接集合
    pub fn replace_links(&mut self, links: Vec<Link>) {
        self.links = links.into();
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    pub fn select_category(&mut self, category_id: Option<String>) {
        self.criteria.category = category_id;
        self.recompute();
    }

    pub fn toggle_tag(&mut self, tag_id: &str) {
        self.criteria.toggle_tag(tag_id);
        self.recompute();
    }

    pub fn set_tags<I, S>(&mut self, tag_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.tags = tag_ids.into_iter().map(Into::into).collect();
        self.recompute();
    }

    pub fn set_favorites_only(&mut self, enabled: bool) {
        self.criteria.favorites_only = enabled;
        self.recompute();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear_filters();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = filter_links(&self.links, &self.criteria);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::{Category, Tag};
    use chrono::Utc;

    fn link(id: &str, title: &str) -> Link {
        Link {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://example.com/{}", id),
            description: None,
            is_favorite: false,
            created_at: Utc::now(),
            updated_at: None,
            category: None,
            tags: Vec::new(),
        }
    }

    fn sample() -> Vec<Link> {
        let mut react = link("l1", "React Docs");
        react.is_favorite = true;
        react.category = Some(Category {
            id: "cat-1".into(),
            name: "Frontend".into(),
            color: "#6366f1".into(),
        });

        let mut vue = link("l2", "Vue Guide");
        vue.tags = vec![Tag {
            id: "tag-1".into(),
            name: "vue".into(),
        }];

        vec![react, vue]
    }

    fn view_ids(dashboard: &Dashboard) -> Vec<&str> {
        dashboard.view().iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_every_setter_recomputes() {
        let mut dashboard = Dashboard::new(sample());
        assert_eq!(view_ids(&dashboard), vec!["l1", "l2"]);

        dashboard.set_query("vue");
        assert_eq!(view_ids(&dashboard), vec!["l2"]);

        dashboard.set_query("");
        dashboard.select_category(Some("cat-1".into()));
        assert_eq!(view_ids(&dashboard), vec!["l1"]);

        dashboard.select_category(None);
        dashboard.toggle_tag("tag-1");
        assert_eq!(view_ids(&dashboard), vec!["l2"]);

        dashboard.set_tags(Vec::<String>::new());
        dashboard.set_favorites_only(true);
        assert_eq!(view_ids(&dashboard), vec!["l1"]);

        dashboard.clear_filters();
        assert_eq!(view_ids(&dashboard), vec!["l1", "l2"]);
    }

    #[test]
    fn test_replace_links_keeps_criteria() {
        let mut dashboard = Dashboard::new(sample());
        dashboard.set_favorites_only(true);

        let mut fresh = sample();
        fresh[1].is_favorite = true;
        dashboard.replace_links(fresh);

        assert_eq!(view_ids(&dashboard), vec!["l1", "l2"]);
        assert!(dashboard.criteria().favorites_only);
    }

    #[test]
    fn test_empty_states() {
        let dashboard = Dashboard::default();
        assert_eq!(dashboard.empty_state(), Some(EmptyState::NoLinks));
        assert_eq!(EmptyState::NoLinks.message(), "No links yet");

        let mut dashboard = Dashboard::new(sample());
        assert_eq!(dashboard.empty_state(), None);

        dashboard.set_query("nothing matches this");
        assert_eq!(dashboard.empty_state(), Some(EmptyState::NoMatches));
        assert_eq!(
            EmptyState::NoMatches.message(),
            "No links match your filters"
        );
    }
}
