//! SeaORM storage backend
//!
//! Bookmark persistence over SeaORM, supporting SQLite, MySQL/MariaDB and
//! PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;
mod store;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, VaultError};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{assemble_links, model_to_category, model_to_tag};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(VaultError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> String {
    match backend {
        "mariadb" => "mysql".to_string(),
        "postgresql" => "postgres".to_string(),
        other => other.to_string(),
    }
}

/// SeaORM-based bookmark store
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        if config.database_url.trim().is_empty() {
            return Err(VaultError::database_config("database_url 未设置"));
        }

        let backend_name = normalize_backend_name(&infer_backend_from_url(&config.database_url)?);

        let db = if backend_name == "sqlite" {
            connect_sqlite(config).await?
        } else {
            connect_generic(config, &backend_name).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name,
            retry_config: retry::RetryConfig::from(config),
        };

        run_migrations(&storage.db).await?;

        info!(
            "{} storage initialized",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(infer_backend_from_url("sqlite://links.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("sqlite::memory:").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("vault.sqlite").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url(":memory:").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("mariadb://u:p@localhost/db").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("postgresql://localhost/db").unwrap(),
            "postgres"
        );
        assert!(infer_backend_from_url("redis://localhost").is_err());
    }

    #[test]
    fn test_normalize_backend_name() {
        assert_eq!(normalize_backend_name("mariadb"), "mysql");
        assert_eq!(normalize_backend_name("postgresql"), "postgres");
        assert_eq!(normalize_backend_name("sqlite"), "sqlite");
    }
}
