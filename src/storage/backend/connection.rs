use std::str::FromStr;
use std::time::Duration;

use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, VaultError};
use migration::{Migrator, MigratorTrait};

/// 连接 SQLite（自动建库、WAL、外键约束）
pub async fn connect_sqlite(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};

    let url = sqlite_url(&config.database_url);
    let in_memory = url.contains(":memory:");

    let mut opt = SqliteConnectOptions::from_str(&url)
        .map_err(|e| VaultError::database_config(format!("SQLite URL 解析失败: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.timeout.max(1)));
    if !in_memory {
        opt = opt.journal_mode(SqliteJournalMode::Wal);
    }

    let pool = sqlite_pool_options(config, in_memory)
        .connect_with(opt)
        .await
        .map_err(|e| VaultError::database_connection(format!("无法连接到 SQLite 数据库: {}", e)))?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// SQLite 连接池参数
///
/// 内存库每个连接都是独立的数据库，且连接关闭时数据随之消失：
/// 只用单连接，并禁止空闲回收和寿命回收。
fn sqlite_pool_options(config: &DatabaseConfig, in_memory: bool) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(config.timeout.max(1)));

    if in_memory {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Option::<Duration>::None)
            .max_lifetime(Option::<Duration>::None)
    } else {
        options.max_connections(config.pool_size.max(1))
    }
}

/// 连接 MySQL / PostgreSQL
pub async fn connect_generic(
    config: &DatabaseConfig,
    backend_name: &str,
) -> Result<DatabaseConnection> {
    let pool_size = config.pool_size.max(1);
    let timeout = Duration::from_secs(config.timeout.max(1));

    let mut opt = ConnectOptions::new(config.database_url.to_owned());
    opt.max_connections(pool_size)
        .min_connections(pool_size.min(2))
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        VaultError::database_connection(format!(
            "无法连接到 {} 数据库: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| VaultError::database_operation(format!("迁移失败: {}", e)))?;

    info!("Database migrations completed");
    Ok(())
}

/// 补全 SQLite URL：`links.db` -> `sqlite://links.db`
fn sqlite_url(database_url: &str) -> String {
    if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else if database_url == ":memory:" {
        "sqlite::memory:".to_string()
    } else {
        format!("sqlite://{}", database_url)
    }
}
