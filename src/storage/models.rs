use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// 读模型：已解析分类和标签的链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Link {
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }

    pub fn to_record(&self, user_id: &str) -> LinkRecord {
        LinkRecord {
            id: self.id.clone(),
            user_id: user_id.to_string(),
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            category_id: self.category_id().map(str::to_string),
            is_favorite: self.is_favorite,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 持久化的链接行（不含关联数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub total_links: u64,
    pub total_categories: u64,
    pub total_tags: u64,
    pub favorite_links: u64,
}
