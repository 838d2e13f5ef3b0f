//! Read operations for SeaOrmStorage

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use tracing::{debug, error};

use super::converters::{assemble_links, model_to_category, model_to_tag};
use super::{SeaOrmStorage, retry};
use crate::errors::{Result, VaultError};
use crate::storage::models::{Category, Link, LinkStats, Tag};

use migration::entities::{category, link, link_tag, tag};

impl SeaOrmStorage {
    /// 当前用户的全部链接，按创建时间倒序，已关联分类和标签
    pub async fn load_links(&self, user_id: &str) -> Result<Vec<Link>> {
        let db = &self.db;

        let models = retry::with_retry(
            &format!("load_links({})", user_id),
            self.retry_config,
            || async {
                link::Entity::find()
                    .filter(link::Column::UserId.eq(user_id))
                    .order_by_desc(link::Column::CreatedAt)
                    .order_by_desc(link::Column::Id)
                    .all(db)
                    .await
            },
        )
        .await
        .map_err(|e| {
            error!("加载链接失败（重试后仍失败）: {}", e);
            VaultError::database_operation(format!("加载链接失败: {}", e))
        })?;

        let categories = self.category_map(user_id).await?;
        let tags = self.tag_map(user_id).await?;
        let pairings = self.pairings_for_user(user_id).await?;

        debug!("Loaded {} links for user {}", models.len(), user_id);
        Ok(assemble_links(models, &categories, pairings, &tags))
    }

    pub async fn load_link(&self, user_id: &str, id: &str) -> Result<Option<Link>> {
        let db = &self.db;

        let model = retry::with_retry(&format!("load_link({})", id), self.retry_config, || async {
            link::Entity::find_by_id(id)
                .filter(link::Column::UserId.eq(user_id))
                .one(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("查询链接失败: {}", e)))?;

        let Some(model) = model else {
            return Ok(None);
        };

        let categories = match model.category_id.as_deref() {
            Some(category_id) => self
                .load_category(user_id, category_id)
                .await?
                .map(|c| (c.id.clone(), c))
                .into_iter()
                .collect(),
            None => HashMap::new(),
        };

        let pairings = retry::with_retry(
            &format!("load_link_tags({})", id),
            self.retry_config,
            || async {
                link_tag::Entity::find()
                    .filter(link_tag::Column::LinkId.eq(id))
                    .all(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("查询链接标签失败: {}", e)))?;

        let tag_ids: Vec<String> = pairings.iter().map(|p| p.tag_id.clone()).collect();
        let tags: HashMap<String, Tag> = self
            .load_tags_by_ids(user_id, tag_ids)
            .await?
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();

        Ok(assemble_links(vec![model], &categories, pairings, &tags).pop())
    }

    /// 分类列表，按名称排序
    pub async fn load_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        let db = &self.db;

        let models = retry::with_retry("load_categories", self.retry_config, || async {
            category::Entity::find()
                .filter(category::Column::UserId.eq(user_id))
                .order_by_asc(category::Column::Name)
                .all(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("加载分类失败: {}", e)))?;

        Ok(models.into_iter().map(model_to_category).collect())
    }

    pub async fn load_category(&self, user_id: &str, id: &str) -> Result<Option<Category>> {
        let db = &self.db;

        let model = retry::with_retry("load_category", self.retry_config, || async {
            category::Entity::find_by_id(id)
                .filter(category::Column::UserId.eq(user_id))
                .one(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("查询分类失败: {}", e)))?;

        Ok(model.map(model_to_category))
    }

    /// 标签列表，按名称排序
    pub async fn load_tags(&self, user_id: &str) -> Result<Vec<Tag>> {
        let db = &self.db;

        let models = retry::with_retry("load_tags", self.retry_config, || async {
            tag::Entity::find()
                .filter(tag::Column::UserId.eq(user_id))
                .order_by_asc(tag::Column::Name)
                .all(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("加载标签失败: {}", e)))?;

        Ok(models.into_iter().map(model_to_tag).collect())
    }

    async fn load_tags_by_ids(&self, user_id: &str, ids: Vec<String>) -> Result<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = &self.db;

        let models = retry::with_retry("load_tags_by_ids", self.retry_config, || async {
            tag::Entity::find()
                .filter(tag::Column::UserId.eq(user_id))
                .filter(tag::Column::Id.is_in(ids.clone()))
                .all(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("查询标签失败: {}", e)))?;

        Ok(models.into_iter().map(model_to_tag).collect())
    }

    async fn category_map(&self, user_id: &str) -> Result<HashMap<String, Category>> {
        Ok(self
            .load_categories(user_id)
            .await?
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect())
    }

    async fn tag_map(&self, user_id: &str) -> Result<HashMap<String, Tag>> {
        Ok(self
            .load_tags(user_id)
            .await?
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect())
    }

    /// 该用户所有链接上的标签关联
    ///
    /// 通过 links.user_id 子查询限定范围，参数个数与标签数量无关
    async fn pairings_for_user(&self, user_id: &str) -> Result<Vec<link_tag::Model>> {
        let db = &self.db;

        retry::with_retry("load_link_tags", self.retry_config, || async {
            let owned_links = link::Entity::find()
                .select_only()
                .column(link::Column::Id)
                .filter(link::Column::UserId.eq(user_id))
                .into_query();
            link_tag::Entity::find()
                .filter(link_tag::Column::LinkId.in_subquery(owned_links))
                .all(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("加载链接标签失败: {}", e)))
    }

    pub async fn get_stats(&self, user_id: &str) -> Result<LinkStats> {
        let db = &self.db;

        let (total_links, favorite_links, total_categories, total_tags) =
            retry::with_retry("get_stats", self.retry_config, || async {
                let total_links = link::Entity::find()
                    .filter(link::Column::UserId.eq(user_id))
                    .count(db)
                    .await?;
                let favorite_links = link::Entity::find()
                    .filter(link::Column::UserId.eq(user_id))
                    .filter(link::Column::IsFavorite.eq(true))
                    .count(db)
                    .await?;
                let total_categories = category::Entity::find()
                    .filter(category::Column::UserId.eq(user_id))
                    .count(db)
                    .await?;
                let total_tags = tag::Entity::find()
                    .filter(tag::Column::UserId.eq(user_id))
                    .count(db)
                    .await?;
                Ok((total_links, favorite_links, total_categories, total_tags))
            })
            .await
            .map_err(|e| VaultError::database_operation(format!("统计查询失败: {}", e)))?;

        Ok(LinkStats {
            total_links,
            total_categories,
            total_tags,
            favorite_links,
        })
    }
}
