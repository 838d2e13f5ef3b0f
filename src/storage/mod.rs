use std::sync::Arc;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{Category, Link, LinkRecord, LinkStats, Tag};

/// 书签数据存储
///
/// 所有操作都按 `user_id` 隔离，其他用户的数据视为不存在。
#[async_trait::async_trait]
pub trait BookmarkStore: Send + Sync {
    /// 全部链接，已关联分类和标签，按创建时间倒序
    async fn fetch_links(&self, user_id: &str) -> Result<Vec<Link>>;
    async fn fetch_link(&self, user_id: &str, id: &str) -> Result<Option<Link>>;
    /// `record.id` 为空时由存储生成
    async fn insert_link(&self, record: LinkRecord) -> Result<LinkRecord>;
    async fn update_link(&self, record: &LinkRecord) -> Result<()>;
    async fn set_favorite(&self, user_id: &str, id: &str, is_favorite: bool) -> Result<()>;
    async fn delete_link(&self, user_id: &str, id: &str) -> Result<()>;

    async fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    async fn insert_category(&self, user_id: &str, name: &str, color: &str) -> Result<Category>;
    async fn delete_category(&self, user_id: &str, id: &str) -> Result<()>;

    async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>>;
    async fn insert_tag(&self, user_id: &str, name: &str) -> Result<Tag>;
    async fn delete_tag(&self, user_id: &str, id: &str) -> Result<()>;

    async fn insert_link_tags(&self, link_id: &str, tag_ids: &[String]) -> Result<()>;
    async fn delete_link_tags(&self, link_id: &str) -> Result<()>;
    async fn delete_link_tag(&self, link_id: &str, tag_id: &str) -> Result<()>;

    async fn stats(&self, user_id: &str) -> Result<LinkStats>;
}

pub struct StorageFactory;

impl StorageFactory {
    /// 按全局配置创建存储
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        let storage = SeaOrmStorage::new(&config.database).await?;
        Ok(Arc::new(storage))
    }
}
