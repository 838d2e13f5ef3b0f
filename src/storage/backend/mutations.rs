//! Write operations for SeaOrmStorage
//!
//! 多步删除在事务中完成，不依赖数据库是否启用了外键级联。

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use tracing::info;

use super::converters::record_to_active_model;
use super::{SeaOrmStorage, retry};
use crate::errors::{Result, VaultError};
use crate::storage::models::{Category, LinkRecord, Tag};

use migration::entities::{category, link, link_tag, tag};

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl SeaOrmStorage {
    /// 插入新链接；`record.id` 为空时生成 UUID
    pub async fn create_link(&self, mut record: LinkRecord) -> Result<LinkRecord> {
        if record.id.is_empty() {
            record.id = new_id();
        }
        let db = &self.db;
        let active = record_to_active_model(&record);

        retry::with_retry(
            &format!("insert_link({})", record.id),
            self.retry_config,
            || async {
                link::Entity::insert(active.clone())
                    .exec_without_returning(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("保存链接失败: {}", e)))?;

        info!("Link created: {} ({})", record.id, record.url);
        Ok(record)
    }

    /// 覆盖链接的可编辑字段
    pub async fn save_link(&self, record: &LinkRecord) -> Result<()> {
        let db = &self.db;

        let result = retry::with_retry(
            &format!("update_link({})", record.id),
            self.retry_config,
            || async {
                link::Entity::update_many()
                    .col_expr(link::Column::Title, Expr::value(record.title.clone()))
                    .col_expr(link::Column::Url, Expr::value(record.url.clone()))
                    .col_expr(
                        link::Column::Description,
                        Expr::value(record.description.clone()),
                    )
                    .col_expr(
                        link::Column::CategoryId,
                        Expr::value(record.category_id.clone()),
                    )
                    .col_expr(link::Column::IsFavorite, Expr::value(record.is_favorite))
                    .col_expr(link::Column::UpdatedAt, Expr::value(record.updated_at))
                    .filter(link::Column::Id.eq(record.id.as_str()))
                    .filter(link::Column::UserId.eq(record.user_id.as_str()))
                    .exec(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("更新链接失败: {}", e)))?;

        // MySQL 在值未变化时返回 0 行，需要再确认一次是否存在
        if result.rows_affected == 0 && !self.link_exists(&record.user_id, &record.id).await? {
            return Err(VaultError::not_found(format!("链接不存在: {}", record.id)));
        }

        info!("Link updated: {}", record.id);
        Ok(())
    }

    pub async fn update_favorite(&self, user_id: &str, id: &str, is_favorite: bool) -> Result<()> {
        let db = &self.db;

        let result = retry::with_retry(
            &format!("set_favorite({})", id),
            self.retry_config,
            || async {
                link::Entity::update_many()
                    .col_expr(link::Column::IsFavorite, Expr::value(is_favorite))
                    .filter(link::Column::Id.eq(id))
                    .filter(link::Column::UserId.eq(user_id))
                    .exec(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("更新收藏状态失败: {}", e)))?;

        if result.rows_affected == 0 && !self.link_exists(user_id, id).await? {
            return Err(VaultError::not_found(format!("链接不存在: {}", id)));
        }
        Ok(())
    }

    pub async fn remove_link(&self, user_id: &str, id: &str) -> Result<()> {
        let txn = self.begin().await?;

        let found = link::Entity::find_by_id(id)
            .filter(link::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;
        if found == 0 {
            return Err(VaultError::not_found(format!("链接不存在: {}", id)));
        }

        link_tag::Entity::delete_many()
            .filter(link_tag::Column::LinkId.eq(id))
            .exec(&txn)
            .await?;
        link::Entity::delete_many()
            .filter(link::Column::Id.eq(id))
            .filter(link::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        commit(txn).await?;
        info!("Link deleted: {}", id);
        Ok(())
    }

    pub async fn create_category(&self, user_id: &str, name: &str, color: &str) -> Result<Category> {
        let model = category::Model {
            id: new_id(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            created_at: Utc::now(),
        };
        let db = &self.db;
        let active: category::ActiveModel = model.clone().into();

        retry::with_retry("insert_category", self.retry_config, || async {
            category::Entity::insert(active.clone())
                .exec_without_returning(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("保存分类失败: {}", e)))?;

        info!("Category created: {} ({})", model.id, model.name);
        Ok(Category {
            id: model.id,
            name: model.name,
            color: model.color,
        })
    }

    /// 删除分类；引用它的链接保留，category_id 置空
    pub async fn remove_category(&self, user_id: &str, id: &str) -> Result<()> {
        let txn = self.begin().await?;

        let found = category::Entity::find_by_id(id)
            .filter(category::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;
        if found == 0 {
            return Err(VaultError::not_found(format!("分类不存在: {}", id)));
        }

        let detached = link::Entity::update_many()
            .col_expr(link::Column::CategoryId, Expr::value(Option::<String>::None))
            .filter(link::Column::UserId.eq(user_id))
            .filter(link::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?;
        category::Entity::delete_many()
            .filter(category::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        commit(txn).await?;
        info!(
            "Category deleted: {} ({} links detached)",
            id, detached.rows_affected
        );
        Ok(())
    }

    pub async fn create_tag(&self, user_id: &str, name: &str) -> Result<Tag> {
        let model = tag::Model {
            id: new_id(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let db = &self.db;
        let active: tag::ActiveModel = model.clone().into();

        retry::with_retry("insert_tag", self.retry_config, || async {
            tag::Entity::insert(active.clone())
                .exec_without_returning(db)
                .await
        })
        .await
        .map_err(|e| VaultError::database_operation(format!("保存标签失败: {}", e)))?;

        info!("Tag created: {} ({})", model.id, model.name);
        Ok(Tag {
            id: model.id,
            name: model.name,
        })
    }

    /// 删除标签及其所有关联，链接本身不受影响
    pub async fn remove_tag(&self, user_id: &str, id: &str) -> Result<()> {
        let txn = self.begin().await?;

        let found = tag::Entity::find_by_id(id)
            .filter(tag::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;
        if found == 0 {
            return Err(VaultError::not_found(format!("标签不存在: {}", id)));
        }

        link_tag::Entity::delete_many()
            .filter(link_tag::Column::TagId.eq(id))
            .exec(&txn)
            .await?;
        tag::Entity::delete_many()
            .filter(tag::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        commit(txn).await?;
        info!("Tag deleted: {}", id);
        Ok(())
    }

    /// 添加链接标签关联，已存在的组合和重复的 id 会被忽略
    pub async fn add_link_tags(&self, link_id: &str, tag_ids: &[String]) -> Result<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let db = &self.db;

        let existing: HashSet<String> = retry::with_retry(
            &format!("load_link_tags({})", link_id),
            self.retry_config,
            || async {
                link_tag::Entity::find()
                    .filter(link_tag::Column::LinkId.eq(link_id))
                    .all(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("查询链接标签失败: {}", e)))?
        .into_iter()
        .map(|m| m.tag_id)
        .collect();

        let mut seen = HashSet::new();
        let new_rows: Vec<link_tag::ActiveModel> = tag_ids
            .iter()
            .filter(|id| !existing.contains(*id) && seen.insert(id.as_str()))
            .map(|tag_id| {
                link_tag::Model {
                    link_id: link_id.to_string(),
                    tag_id: tag_id.clone(),
                }
                .into()
            })
            .collect();

        if new_rows.is_empty() {
            return Ok(());
        }
        let count = new_rows.len();

        retry::with_retry(
            &format!("insert_link_tags({})", link_id),
            self.retry_config,
            || async {
                link_tag::Entity::insert_many(new_rows.clone())
                    .exec_without_returning(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("保存链接标签失败: {}", e)))?;

        info!("Attached {} tags to link {}", count, link_id);
        Ok(())
    }

    pub async fn clear_link_tags(&self, link_id: &str) -> Result<()> {
        let db = &self.db;

        retry::with_retry(
            &format!("delete_link_tags({})", link_id),
            self.retry_config,
            || async {
                link_tag::Entity::delete_many()
                    .filter(link_tag::Column::LinkId.eq(link_id))
                    .exec(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("删除链接标签失败: {}", e)))?;
        Ok(())
    }

    pub async fn remove_link_tag(&self, link_id: &str, tag_id: &str) -> Result<()> {
        let db = &self.db;

        let result = retry::with_retry(
            &format!("delete_link_tag({}, {})", link_id, tag_id),
            self.retry_config,
            || async {
                link_tag::Entity::delete_many()
                    .filter(link_tag::Column::LinkId.eq(link_id))
                    .filter(link_tag::Column::TagId.eq(tag_id))
                    .exec(db)
                    .await
            },
        )
        .await
        .map_err(|e| VaultError::database_operation(format!("删除链接标签失败: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(VaultError::not_found(format!(
                "链接 {} 没有标签 {}",
                link_id, tag_id
            )));
        }
        Ok(())
    }

    async fn link_exists(&self, user_id: &str, id: &str) -> Result<bool> {
        let found = link::Entity::find_by_id(id)
            .filter(link::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(found > 0)
    }

    async fn begin(&self) -> Result<sea_orm::DatabaseTransaction> {
        self.db
            .begin()
            .await
            .map_err(|e| VaultError::database_operation(format!("开始事务失败: {}", e)))
    }
}

async fn commit(txn: sea_orm::DatabaseTransaction) -> Result<()> {
    txn.commit()
        .await
        .map_err(|e| VaultError::database_operation(format!("提交事务失败: {}", e)))
}

