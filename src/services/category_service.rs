use std::sync::Arc;

use tracing::info;

use crate::errors::{Result, VaultError};
use crate::event::{DataEvent, EventBus};
use crate::storage::{BookmarkStore, Category};
use crate::utils::is_hex_color;

/// 分类可选的预设颜色，第一个为默认值
pub const CATEGORY_PALETTE: [&str; 12] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#f43f5e", "#f97316", "#eab308", "#22c55e", "#10b981",
    "#14b8a6", "#06b6d4", "#3b82f6", "#a855f7",
];

pub const DEFAULT_CATEGORY_COLOR: &str = CATEGORY_PALETTE[0];

pub struct CategoryService {
    store: Arc<dyn BookmarkStore>,
    events: EventBus,
}

impl CategoryService {
    pub fn new(store: Arc<dyn BookmarkStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    pub async fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.store.list_categories(user_id).await
    }

    /// `color` 缺省或为空时使用默认颜色
    pub async fn create_category(
        &self,
        user_id: &str,
        name: &str,
        color: Option<&str>,
    ) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VaultError::validation("Category name is required"));
        }

        let color = match color.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) if is_hex_color(c) => c.to_lowercase(),
            Some(c) => {
                return Err(VaultError::validation(format!(
                    "Invalid color '{}': expected #rrggbb",
                    c
                )));
            }
            None => DEFAULT_CATEGORY_COLOR.to_string(),
        };

        let category = self.store.insert_category(user_id, name, &color).await?;

        info!("CategoryService: created category '{}'", category.name);
        self.events.publish(DataEvent::CategoryCreated {
            user_id: user_id.to_string(),
            category_id: category.id.clone(),
        });
        Ok(category)
    }

    /// 删除分类，原本属于它的链接变为未分类
    pub async fn delete_category(&self, user_id: &str, id: &str) -> Result<()> {
        self.store.delete_category(user_id, id).await?;

        info!("CategoryService: deleted category {}", id);
        self.events.publish(DataEvent::CategoryDeleted {
            user_id: user_id.to_string(),
            category_id: id.to_string(),
        });
        Ok(())
    }
}
