//! Link management service

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::errors::{Result, VaultError};
use crate::event::{DataEvent, EventBus};
use crate::filter::{FilterCriteria, filter_links};
use crate::storage::{BookmarkStore, Link, LinkRecord, LinkStats};
use crate::utils::normalize_optional;
use crate::utils::url_validator::validate_url;

// ============ Request DTOs ============

/// Request to save a new link
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    pub title: String,
    pub url: String,
    /// Blank means no description
    pub description: Option<String>,
    /// Blank means uncategorized
    pub category_id: Option<String>,
    pub tag_ids: Vec<String>,
}

/// Request to edit a link
///
/// `None` keeps the current value. For `description` and `category_id`,
/// `Some("")` clears it. `tag_ids: Some(v)` replaces all tags with `v`.
#[derive(Debug, Clone, Default)]
pub struct UpdateLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub tag_ids: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
}

impl UpdateLinkRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.tag_ids.is_none()
            && self.is_favorite.is_none()
    }
}

// ============ LinkService ============

pub struct LinkService {
    store: Arc<dyn BookmarkStore>,
    events: EventBus,
}

impl LinkService {
    pub fn new(store: Arc<dyn BookmarkStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    pub async fn list_links(&self, user_id: &str) -> Result<Vec<Link>> {
        self.store.fetch_links(user_id).await
    }

    pub async fn get_link(&self, user_id: &str, id: &str) -> Result<Link> {
        self.store
            .fetch_link(user_id, id)
            .await?
            .ok_or_else(|| VaultError::not_found(format!("Link not found: {}", id)))
    }

    /// 拉取全部链接后在内存中过滤
    pub async fn search_links(&self, user_id: &str, criteria: &FilterCriteria) -> Result<Vec<Link>> {
        let links = self.store.fetch_links(user_id).await?;
        let filtered = filter_links(&links, criteria);
        debug!(
            "search_links: {} of {} links match",
            filtered.len(),
            links.len()
        );
        Ok(filtered)
    }

    pub async fn stats(&self, user_id: &str) -> Result<LinkStats> {
        self.store.stats(user_id).await
    }

    pub async fn create_link(&self, user_id: &str, req: CreateLinkRequest) -> Result<Link> {
        let title = validate_title(&req.title)?;
        let url = validate_url(&req.url)?;
        let category_id = normalize_optional(req.category_id);
        if let Some(category_id) = &category_id {
            self.ensure_category(user_id, category_id).await?;
        }
        let tag_ids = self.resolve_tag_ids(user_id, &req.tag_ids).await?;

        let record = LinkRecord {
            id: String::new(),
            user_id: user_id.to_string(),
            title,
            url,
            description: normalize_optional(req.description),
            category_id,
            is_favorite: false,
            created_at: Utc::now(),
            updated_at: None,
        };

        let record = self.store.insert_link(record).await?;
        if let Err(e) = self.store.insert_link_tags(&record.id, &tag_ids).await {
            // 撤销已插入的链接
            warn!(
                "LinkService: attaching tags to {} failed, rolling back: {}",
                record.id, e
            );
            if let Err(cleanup) = self.store.delete_link(user_id, &record.id).await {
                error!(
                    "LinkService: rollback of link {} failed: {}",
                    record.id, cleanup
                );
            }
            return Err(e);
        }

        info!("LinkService: created link '{}' -> {}", record.title, record.url);
        self.events.publish(DataEvent::LinkCreated {
            user_id: user_id.to_string(),
            link_id: record.id.clone(),
        });

        self.get_link(user_id, &record.id).await
    }

    pub async fn update_link(&self, user_id: &str, id: &str, req: UpdateLinkRequest) -> Result<Link> {
        let existing = self.get_link(user_id, id).await?;
        let mut record = existing.to_record(user_id);

        if let Some(title) = &req.title {
            record.title = validate_title(title)?;
        }
        if let Some(url) = &req.url {
            record.url = validate_url(url)?;
        }
        if let Some(description) = req.description {
            record.description = normalize_optional(Some(description));
        }
        if let Some(category_id) = req.category_id {
            record.category_id = normalize_optional(Some(category_id));
            if let Some(category_id) = &record.category_id {
                self.ensure_category(user_id, category_id).await?;
            }
        }
        if let Some(is_favorite) = req.is_favorite {
            record.is_favorite = is_favorite;
        }
        let tag_ids = match &req.tag_ids {
            Some(ids) => Some(self.resolve_tag_ids(user_id, ids).await?),
            None => None,
        };

        record.updated_at = Some(Utc::now());
        self.store.update_link(&record).await?;

        if let Some(tag_ids) = tag_ids {
            self.store.delete_link_tags(id).await?;
            self.store.insert_link_tags(id, &tag_ids).await?;
        }

        info!("LinkService: updated link {}", id);
        self.events.publish(DataEvent::LinkUpdated {
            user_id: user_id.to_string(),
            link_id: id.to_string(),
        });

        self.get_link(user_id, id).await
    }

    pub async fn toggle_favorite(&self, user_id: &str, id: &str) -> Result<Link> {
        let link = self.get_link(user_id, id).await?;
        self.store
            .set_favorite(user_id, id, !link.is_favorite)
            .await?;

        self.events.publish(DataEvent::LinkUpdated {
            user_id: user_id.to_string(),
            link_id: id.to_string(),
        });

        Ok(Link {
            is_favorite: !link.is_favorite,
            ..link
        })
    }

    pub async fn delete_link(&self, user_id: &str, id: &str) -> Result<()> {
        self.store.delete_link(user_id, id).await?;

        info!("LinkService: deleted link {}", id);
        self.events.publish(DataEvent::LinkDeleted {
            user_id: user_id.to_string(),
            link_id: id.to_string(),
        });
        Ok(())
    }

    /// 移除链接上的单个标签，标签本身保留
    pub async fn detach_tag(&self, user_id: &str, link_id: &str, tag_id: &str) -> Result<Link> {
        let link = self.get_link(user_id, link_id).await?;
        if !link.has_tag(tag_id) {
            return Err(VaultError::not_found(format!(
                "Link {} has no tag {}",
                link_id, tag_id
            )));
        }
        self.store.delete_link_tag(link_id, tag_id).await?;

        self.events.publish(DataEvent::LinkUpdated {
            user_id: user_id.to_string(),
            link_id: link_id.to_string(),
        });

        self.get_link(user_id, link_id).await
    }

    async fn ensure_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        let categories = self.store.list_categories(user_id).await?;
        if categories.iter().any(|c| c.id == category_id) {
            Ok(())
        } else {
            Err(VaultError::not_found(format!(
                "Category not found: {}",
                category_id
            )))
        }
    }

    /// 去重、去空白，并确认每个标签都属于当前用户
    async fn resolve_tag_ids(&self, user_id: &str, tag_ids: &[String]) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let ids: Vec<String> = tag_ids
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty() && seen.insert(id.clone()))
            .collect();
        if ids.is_empty() {
            return Ok(ids);
        }

        let known: HashSet<String> = self
            .store
            .list_tags(user_id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        if let Some(missing) = ids.iter().find(|id| !known.contains(*id)) {
            return Err(VaultError::not_found(format!("Tag not found: {}", missing)));
        }
        Ok(ids)
    }
}

fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(VaultError::validation("Title is required"));
    }
    Ok(title.to_string())
}
