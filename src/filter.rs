//! Link filter
//!
//! Pure derivation of the displayed subset of a user's links from the
//! current [`FilterCriteria`]. Active criteria are AND-ed together; input
//! order is preserved, so a newest-first collection stays newest-first.
//!
//! - text query: case-insensitive substring of title, description or URL
//! - category: the link's category id equals the selected one
//! - tags: the link carries at least one selected tag (OR within the set)
//! - favorites: only links flagged as favorite

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::storage::models::Link;

/// 过滤条件，不持久化
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    pub fn with_tag(mut self, tag_id: impl Into<String>) -> Self {
        self.tags.insert(tag_id.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tag_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tag_ids.into_iter().map(Into::into));
        self
    }

    pub fn favorites_only(mut self, enabled: bool) -> Self {
        self.favorites_only = enabled;
        self
    }

    /// The trimmed query, or `None` when the text criterion is inactive.
    fn active_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// 没有任何条件生效时，过滤结果等于输入
    pub fn is_inactive(&self) -> bool {
        self.active_query().is_none()
            && self.category.is_none()
            && self.tags.is_empty()
            && !self.favorites_only
    }

    /// Whether category, tag or favorites narrowing is on.
    ///
    /// The text query is not counted; it has its own input and is not reset by
    /// [`clear_filters`](Self::clear_filters).
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some() || !self.tags.is_empty() || self.favorites_only
    }

    /// 选中则取消，未选中则加入
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if !self.tags.remove(tag_id) {
            self.tags.insert(tag_id.to_string());
        }
    }

    /// 重置分类、标签和收藏条件，保留搜索文本
    pub fn clear_filters(&mut self) {
        self.category = None;
        self.tags.clear();
        self.favorites_only = false;
    }

    pub fn matches(&self, link: &Link) -> bool {
        self.matcher().matches(link)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            query: self.active_query(),
            criteria: self,
        }
    }
}

/// 预先计算小写查询串，避免每条链接重复分配
struct Matcher<'a> {
    query: Option<String>,
    criteria: &'a FilterCriteria,
}

impl Matcher<'_> {
    fn matches(&self, link: &Link) -> bool {
        if let Some(query) = &self.query
            && !contains_ignore_case(&link.title, query)
            && !contains_ignore_case(link.description.as_deref().unwrap_or(""), query)
            && !contains_ignore_case(&link.url, query)
        {
            return false;
        }

        if let Some(category_id) = &self.criteria.category
            && link.category_id() != Some(category_id.as_str())
        {
            return false;
        }

        if !self.criteria.tags.is_empty()
            && !link.tags.iter().any(|t| self.criteria.tags.contains(&t.id))
        {
            return false;
        }

        !self.criteria.favorites_only || link.is_favorite
    }
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// 按条件过滤链接，保持原有顺序
pub fn filter_links(links: &[Link], criteria: &FilterCriteria) -> Vec<Link> {
    if criteria.is_inactive() {
        return links.to_vec();
    }

    let matcher = criteria.matcher();
    links
        .iter()
        .filter(|link| matcher.matches(link))
        .cloned()
        .collect()
}
