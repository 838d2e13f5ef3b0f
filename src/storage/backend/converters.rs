use std::collections::HashMap;

use crate::storage::models::{Category, Link, LinkRecord, Tag};
use migration::entities::{category, link, link_tag, tag};

pub fn model_to_category(model: category::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        color: model.color,
    }
}

pub fn model_to_tag(model: tag::Model) -> Tag {
    Tag {
        id: model.id,
        name: model.name,
    }
}

/// 新链接行的 ActiveModel，所有列都会写入
pub fn record_to_active_model(record: &LinkRecord) -> link::ActiveModel {
    use sea_orm::ActiveValue::Set;

    link::ActiveModel {
        id: Set(record.id.clone()),
        user_id: Set(record.user_id.clone()),
        title: Set(record.title.clone()),
        url: Set(record.url.clone()),
        description: Set(record.description.clone()),
        category_id: Set(record.category_id.clone()),
        is_favorite: Set(record.is_favorite),
        created_at: Set(record.created_at),
        updated_at: Set(record.updated_at),
    }
}

/// 组装读模型：为每个链接解析分类和标签
///
/// 保持 `models` 的顺序；标签按名称排序。引用了不存在的分类或标签时按缺失处理。
pub fn assemble_links(
    models: Vec<link::Model>,
    categories: &HashMap<String, Category>,
    pairings: Vec<link_tag::Model>,
    tags: &HashMap<String, Tag>,
) -> Vec<Link> {
    let mut tags_by_link: HashMap<String, Vec<Tag>> = HashMap::new();
    for pairing in pairings {
        if let Some(tag) = tags.get(&pairing.tag_id) {
            tags_by_link
                .entry(pairing.link_id)
                .or_default()
                .push(tag.clone());
        }
    }

    models
        .into_iter()
        .map(|model| {
            let mut link_tags = tags_by_link.remove(&model.id).unwrap_or_default();
            link_tags.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

            let category = model
                .category_id
                .as_ref()
                .and_then(|id| categories.get(id))
                .cloned();

            Link {
                id: model.id,
                title: model.title,
                url: model.url,
                description: model.description,
                is_favorite: model.is_favorite,
                created_at: model.created_at,
                updated_at: model.updated_at,
                category,
                tags: link_tags,
            }
        })
        .collect()
}
