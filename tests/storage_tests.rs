//! Storage backend tests
//!
//! Tests for SeaOrmStorage using temporary SQLite databases.

use chrono::{Duration, TimeZone, Utc};
use linkvault::config::DatabaseConfig;
use linkvault::storage::backend::{SeaOrmStorage, infer_backend_from_url};
use linkvault::storage::{BookmarkStore, LinkRecord};
use tempfile::TempDir;

/// 创建临时 SQLite 数据库的存储实例
async fn create_temp_storage() -> (SeaOrmStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        ..Default::default()
    };

    let storage = SeaOrmStorage::new(&config)
        .await
        .expect("Failed to create storage");

    (storage, temp_dir)
}

/// 指定创建时间的链接记录，minutes 越大越新
fn record(user: &str, id: &str, title: &str, minutes: i64) -> LinkRecord {
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    LinkRecord {
        id: id.to_string(),
        user_id: user.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        description: None,
        category_id: None,
        is_favorite: false,
        created_at: base + Duration::minutes(minutes),
        updated_at: None,
    }
}

#[test]
fn test_infer_backend() {
    assert_eq!(infer_backend_from_url("sqlite://vault.db").unwrap(), "sqlite");
    assert_eq!(infer_backend_from_url("mysql://localhost/db").unwrap(), "mysql");
    assert_eq!(
        infer_backend_from_url("postgres://localhost/db").unwrap(),
        "postgres"
    );
    assert!(infer_backend_from_url("ftp://nope").is_err());
}

#[tokio::test]
async fn test_empty_database_url_is_rejected() {
    let config = DatabaseConfig {
        database_url: "  ".to_string(),
        ..Default::default()
    };
    assert!(SeaOrmStorage::new(&config).await.is_err());
}

#[tokio::test]
async fn test_fetch_links_enriched_and_newest_first() {
    let (storage, _dir) = create_temp_storage().await;
    assert_eq!(storage.backend_name(), "sqlite");

    let frontend = storage
        .insert_category("u1", "Frontend", "#6366f1")
        .await
        .unwrap();
    let vue = storage.insert_tag("u1", "vue").await.unwrap();
    let docs = storage.insert_tag("u1", "docs").await.unwrap();

    let mut older = record("u1", "l-old", "React Docs", 0);
    older.category_id = Some(frontend.id.clone());
    older.description = Some("Official docs".to_string());
    storage.insert_link(older).await.unwrap();
    storage
        .insert_link(record("u1", "l-new", "Vue Guide", 10))
        .await
        .unwrap();
    storage
        .insert_link_tags("l-new", &[vue.id.clone(), docs.id.clone()])
        .await
        .unwrap();

    let links = storage.fetch_links("u1").await.unwrap();
    let ids: Vec<_> = links.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l-new", "l-old"]);

    assert!(links[0].category.is_none());
    let tag_names: Vec<_> = links[0].tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tag_names, vec!["docs", "vue"]);

    assert_eq!(links[1].category.as_ref(), Some(&frontend));
    assert_eq!(links[1].description.as_deref(), Some("Official docs"));
    assert!(links[1].tags.is_empty());
}

#[tokio::test]
async fn test_insert_generates_id_when_empty() {
    let (storage, _dir) = create_temp_storage().await;

    let saved = storage
        .insert_link(record("u1", "", "No id yet", 0))
        .await
        .unwrap();
    assert!(!saved.id.is_empty());
    assert!(storage.fetch_link("u1", &saved.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_rows_are_scoped_to_user() {
    let (storage, _dir) = create_temp_storage().await;

    storage
        .insert_link(record("alice", "l1", "Alice's link", 0))
        .await
        .unwrap();
    storage.insert_tag("alice", "private").await.unwrap();

    assert!(storage.fetch_links("bob").await.unwrap().is_empty());
    assert!(storage.fetch_link("bob", "l1").await.unwrap().is_none());
    assert!(storage.list_tags("bob").await.unwrap().is_empty());

    let err = storage.delete_link("bob", "l1").await.unwrap_err();
    assert!(err.is_not_found());
    let err = storage.set_favorite("bob", "l1", true).await.unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(storage.fetch_links("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_link_overwrites_editable_fields() {
    let (storage, _dir) = create_temp_storage().await;
    let category = storage.insert_category("u1", "Docs", "#22c55e").await.unwrap();

    let original = storage
        .insert_link(record("u1", "l1", "Before", 0))
        .await
        .unwrap();

    let mut edited = original.clone();
    edited.title = "After".to_string();
    edited.url = "https://after.example.com".to_string();
    edited.description = Some("changed".to_string());
    edited.category_id = Some(category.id.clone());
    edited.updated_at = Some(Utc::now());
    storage.update_link(&edited).await.unwrap();

    let link = storage.fetch_link("u1", "l1").await.unwrap().unwrap();
    assert_eq!(link.title, "After");
    assert_eq!(link.url, "https://after.example.com");
    assert_eq!(link.description.as_deref(), Some("changed"));
    assert_eq!(link.category_id(), Some(category.id.as_str()));
    assert!(link.updated_at.is_some());
    assert_eq!(link.created_at, original.created_at);
}

#[tokio::test]
async fn test_update_unknown_link_is_not_found() {
    let (storage, _dir) = create_temp_storage().await;

    let err = storage
        .update_link(&record("u1", "missing", "Ghost", 0))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_set_favorite() {
    let (storage, _dir) = create_temp_storage().await;
    storage
        .insert_link(record("u1", "l1", "Fav", 0))
        .await
        .unwrap();

    storage.set_favorite("u1", "l1", true).await.unwrap();
    assert!(storage.fetch_link("u1", "l1").await.unwrap().unwrap().is_favorite);

    storage.set_favorite("u1", "l1", false).await.unwrap();
    assert!(!storage.fetch_link("u1", "l1").await.unwrap().unwrap().is_favorite);
}

#[tokio::test]
async fn test_delete_category_keeps_links() {
    let (storage, _dir) = create_temp_storage().await;
    let category = storage
        .insert_category("u1", "Reading", "#f97316")
        .await
        .unwrap();

    let mut link = record("u1", "l1", "Article", 0);
    link.category_id = Some(category.id.clone());
    storage.insert_link(link).await.unwrap();

    storage.delete_category("u1", &category.id).await.unwrap();

    let link = storage.fetch_link("u1", "l1").await.unwrap().unwrap();
    assert!(link.category.is_none());
    assert!(storage.list_categories("u1").await.unwrap().is_empty());

    let err = storage.delete_category("u1", &category.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_tag_removes_pairings_only() {
    let (storage, _dir) = create_temp_storage().await;
    let rust = storage.insert_tag("u1", "rust").await.unwrap();
    let web = storage.insert_tag("u1", "web").await.unwrap();

    storage
        .insert_link(record("u1", "l1", "Axum", 0))
        .await
        .unwrap();
    storage
        .insert_link_tags("l1", &[rust.id.clone(), web.id.clone()])
        .await
        .unwrap();

    storage.delete_tag("u1", &rust.id).await.unwrap();

    let link = storage.fetch_link("u1", "l1").await.unwrap().unwrap();
    assert_eq!(link.tags.len(), 1);
    assert_eq!(link.tags[0].id, web.id);
    assert_eq!(storage.list_tags("u1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_link_removes_pairings_not_tags() {
    let (storage, _dir) = create_temp_storage().await;
    let tag = storage.insert_tag("u1", "keep-me").await.unwrap();

    storage
        .insert_link(record("u1", "l1", "Temp", 0))
        .await
        .unwrap();
    storage
        .insert_link_tags("l1", std::slice::from_ref(&tag.id))
        .await
        .unwrap();

    storage.delete_link("u1", "l1").await.unwrap();

    assert!(storage.fetch_link("u1", "l1").await.unwrap().is_none());
    assert_eq!(storage.list_tags("u1").await.unwrap(), vec![tag.clone()]);

    // 同 id 重新插入不会带回旧的标签关联
    storage
        .insert_link(record("u1", "l1", "Again", 0))
        .await
        .unwrap();
    assert!(
        storage
            .fetch_link("u1", "l1")
            .await
            .unwrap()
            .unwrap()
            .tags
            .is_empty()
    );
}

#[tokio::test]
async fn test_insert_link_tags_ignores_duplicates() {
    let (storage, _dir) = create_temp_storage().await;
    let tag = storage.insert_tag("u1", "dup").await.unwrap();
    storage
        .insert_link(record("u1", "l1", "Dup", 0))
        .await
        .unwrap();

    storage
        .insert_link_tags("l1", &[tag.id.clone(), tag.id.clone()])
        .await
        .unwrap();
    storage
        .insert_link_tags("l1", std::slice::from_ref(&tag.id))
        .await
        .unwrap();

    let link = storage.fetch_link("u1", "l1").await.unwrap().unwrap();
    assert_eq!(link.tags.len(), 1);
}

#[tokio::test]
async fn test_delete_single_link_tag() {
    let (storage, _dir) = create_temp_storage().await;
    let a = storage.insert_tag("u1", "a").await.unwrap();
    let b = storage.insert_tag("u1", "b").await.unwrap();
    storage
        .insert_link(record("u1", "l1", "Tagged", 0))
        .await
        .unwrap();
    storage
        .insert_link_tags("l1", &[a.id.clone(), b.id.clone()])
        .await
        .unwrap();

    storage.delete_link_tag("l1", &a.id).await.unwrap();
    let link = storage.fetch_link("u1", "l1").await.unwrap().unwrap();
    assert_eq!(link.tags, vec![b.clone()]);

    let err = storage.delete_link_tag("l1", &a.id).await.unwrap_err();
    assert!(err.is_not_found());

    storage.delete_link_tags("l1").await.unwrap();
    let link = storage.fetch_link("u1", "l1").await.unwrap().unwrap();
    assert!(link.tags.is_empty());
}

#[tokio::test]
async fn test_categories_and_tags_sorted_by_name() {
    let (storage, _dir) = create_temp_storage().await;
    storage.insert_category("u1", "Zeta", "#6366f1").await.unwrap();
    storage.insert_category("u1", "Alpha", "#6366f1").await.unwrap();
    storage.insert_tag("u1", "rust").await.unwrap();
    storage.insert_tag("u1", "css").await.unwrap();

    let names: Vec<_> = storage
        .list_categories("u1")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);

    let names: Vec<_> = storage
        .list_tags("u1")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["css", "rust"]);
}

#[tokio::test]
async fn test_stats() {
    let (storage, _dir) = create_temp_storage().await;
    storage.insert_category("u1", "One", "#6366f1").await.unwrap();
    storage.insert_tag("u1", "t1").await.unwrap();
    storage.insert_tag("u1", "t2").await.unwrap();
    storage
        .insert_link(record("u1", "l1", "A", 0))
        .await
        .unwrap();
    storage
        .insert_link(record("u1", "l2", "B", 1))
        .await
        .unwrap();
    storage
        .insert_link(record("other", "l3", "C", 2))
        .await
        .unwrap();
    storage.set_favorite("u1", "l2", true).await.unwrap();

    let stats = storage.stats("u1").await.unwrap();
    assert_eq!(stats.total_links, 2);
    assert_eq!(stats.favorite_links, 1);
    assert_eq!(stats.total_categories, 1);
    assert_eq!(stats.total_tags, 2);
}

#[tokio::test]
async fn test_fetch_links_with_large_tag_set() {
    let (storage, _dir) = create_temp_storage().await;

    let mut tag_ids = Vec::new();
    for i in 0..1200 {
        let tag = storage.insert_tag("u1", &format!("t{:04}", i)).await.unwrap();
        tag_ids.push(tag.id);
    }
    for (n, chunk) in tag_ids.chunks(200).enumerate() {
        let id = format!("l{}", n);
        storage
            .insert_link(record("u1", &id, "Many", n as i64))
            .await
            .unwrap();
        storage.insert_link_tags(&id, chunk).await.unwrap();
    }

    let other_tag = storage.insert_tag("u2", "other").await.unwrap();
    storage
        .insert_link(record("u2", "x1", "Other", 0))
        .await
        .unwrap();
    storage
        .insert_link_tags("x1", std::slice::from_ref(&other_tag.id))
        .await
        .unwrap();

    let links = storage.fetch_links("u1").await.unwrap();
    assert_eq!(links.len(), 6);
    assert!(links.iter().all(|l| l.tags.len() == 200));
    assert!(links.iter().all(|l| !l.has_tag(&other_tag.id)));

    let other = storage.fetch_links("u2").await.unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].tags.len(), 1);
    assert_eq!(other[0].tags[0].name, "other");
}
