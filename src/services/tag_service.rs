use std::sync::Arc;

use tracing::info;

use crate::errors::{Result, VaultError};
use crate::event::{DataEvent, EventBus};
use crate::storage::{BookmarkStore, Tag};

pub struct TagService {
    store: Arc<dyn BookmarkStore>,
    events: EventBus,
}

impl TagService {
    pub fn new(store: Arc<dyn BookmarkStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    pub async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>> {
        self.store.list_tags(user_id).await
    }

    pub async fn create_tag(&self, user_id: &str, name: &str) -> Result<Tag> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::validation("Tag name is required"));
        }

        let tag = self.store.insert_tag(user_id, name).await?;

        info!("TagService: created tag '{}'", tag.name);
        self.events.publish(DataEvent::TagCreated {
            user_id: user_id.to_string(),
            tag_id: tag.id.clone(),
        });
        Ok(tag)
    }

    /// 删除标签及其所有链接关联
    pub async fn delete_tag(&self, user_id: &str, id: &str) -> Result<()> {
        self.store.delete_tag(user_id, id).await?;

        info!("TagService: deleted tag {}", id);
        self.events.publish(DataEvent::TagDeleted {
            user_id: user_id.to_string(),
            tag_id: id.to_string(),
        });
        Ok(())
    }
}
