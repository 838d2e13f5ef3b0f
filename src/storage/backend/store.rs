use super::SeaOrmStorage;
use crate::errors::Result;
use crate::storage::BookmarkStore;
use crate::storage::models::{Category, Link, LinkRecord, LinkStats, Tag};

#[async_trait::async_trait]
impl BookmarkStore for SeaOrmStorage {
    async fn fetch_links(&self, user_id: &str) -> Result<Vec<Link>> {
        self.load_links(user_id).await
    }

    async fn fetch_link(&self, user_id: &str, id: &str) -> Result<Option<Link>> {
        self.load_link(user_id, id).await
    }

    async fn insert_link(&self, record: LinkRecord) -> Result<LinkRecord> {
        self.create_link(record).await
    }

    async fn update_link(&self, record: &LinkRecord) -> Result<()> {
        self.save_link(record).await
    }

    async fn set_favorite(&self, user_id: &str, id: &str, is_favorite: bool) -> Result<()> {
        self.update_favorite(user_id, id, is_favorite).await
    }

    async fn delete_link(&self, user_id: &str, id: &str) -> Result<()> {
        self.remove_link(user_id, id).await
    }

    async fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.load_categories(user_id).await
    }

    async fn insert_category(&self, user_id: &str, name: &str, color: &str) -> Result<Category> {
        self.create_category(user_id, name, color).await
    }

    async fn delete_category(&self, user_id: &str, id: &str) -> Result<()> {
        self.remove_category(user_id, id).await
    }

    async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>> {
        self.load_tags(user_id).await
    }

    async fn insert_tag(&self, user_id: &str, name: &str) -> Result<Tag> {
        self.create_tag(user_id, name).await
    }

    async fn delete_tag(&self, user_id: &str, id: &str) -> Result<()> {
        self.remove_tag(user_id, id).await
    }

    async fn insert_link_tags(&self, link_id: &str, tag_ids: &[String]) -> Result<()> {
        self.add_link_tags(link_id, tag_ids).await
    }

    async fn delete_link_tags(&self, link_id: &str) -> Result<()> {
        self.clear_link_tags(link_id).await
    }

    async fn delete_link_tag(&self, link_id: &str, tag_id: &str) -> Result<()> {
        self.remove_link_tag(link_id, tag_id).await
    }

    async fn stats(&self, user_id: &str) -> Result<LinkStats> {
        self.get_stats(user_id).await
    }
}
