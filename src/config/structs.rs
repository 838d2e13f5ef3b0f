use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::errors::{Result, VaultError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 LV__DATABASE__DATABASE_URL
pub const ENV_PREFIX: &str = "LV";

/// 日志输出格式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LogFormat::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid log format: '{}'. Valid: text, json", s))
    }
}

/// 静态配置（从 TOML + 环境变量加载）
///
/// - database: 数据库连接配置
/// - logging: 日志配置
/// - user: 当前用户身份
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub user: UserConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| VaultError::config(format!("Failed to build config: {}", e)))?;

        settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| VaultError::config(format!("Failed to deserialize config: {}", e)))
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// The identity every store call is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

// ============================================================
// Default value functions
// ============================================================

fn default_database_url() -> String {
    "sqlite://linkvault.db".to_string()
}

fn default_database_pool_size() -> u32 {
    5
}

fn default_database_timeout() -> u64 {
    8
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    100
}

fn default_retry_max_delay_ms() -> u64 {
    2000
}

// CLI 输出优先，默认只打印 warn 以上
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_display_name() -> String {
    "Local user".to_string()
}

// ============================================================
// Default implementations
// ============================================================

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
            retry_count: default_retry_count(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
            display_name: default_display_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.database.database_url, "sqlite://linkvault.db");
        assert_eq!(config.database.retry_count, 3);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.user.id, "local");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" TEXT ".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_sample_config_round_trips_through_toml() {
        let sample = StaticConfig::generate_sample_config().unwrap();
        assert!(sample.contains("[database]"));
        assert!(sample.contains("[user]"));

        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.database.pool_size, 5);
        assert_eq!(parsed.user.display_name, "Local user");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vault.toml");
        std::fs::write(
            &path,
            "[database]\ndatabase_url = \"sqlite://other.db\"\n\n[user]\nid = \"alice\"\n",
        )
        .unwrap();

        let config = StaticConfig::try_load(path.to_str()).unwrap();
        assert_eq!(config.database.database_url, "sqlite://other.db");
        assert_eq!(config.user.id, "alice");
        // 未写入的字段回落到默认值
        assert_eq!(config.database.retry_max_delay_ms, 2000);
    }

    #[test]
    fn test_save_to_file_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        StaticConfig::default().save_to_file(&path).unwrap();
        assert!(path.exists());
    }
}
