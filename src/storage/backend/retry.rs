//! 数据库操作重试
//!
//! 连接获取失败、死锁、SQLite 的 "database is locked" 等瞬时错误按指数退避重试，
//! 其余错误立即返回。

use std::future::Future;
use std::time::Duration;

use sea_orm::DbErr;
use sea_orm::error::RuntimeErr;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::DatabaseConfig;

/// 瞬时错误的数据库错误码
/// MySQL: 1213 死锁, 1205 锁等待超时
/// PostgreSQL: 40001 序列化失败, 40P01 死锁
/// SQLite: 5 BUSY, 6 LOCKED
const TRANSIENT_CODES: &[&str] = &["1213", "1205", "40001", "40P01", "5", "6"];

const TRANSIENT_MESSAGES: &[&str] = &[
    "deadlock",
    "lock wait timeout",
    "database is locked",
    "database table is locked",
    "serialization failure",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&DatabaseConfig::default())
    }
}

impl From<&DatabaseConfig> for RetryConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_retries: config.retry_count,
            base_delay_ms: config.retry_base_delay_ms,
            max_delay_ms: config.retry_max_delay_ms.max(config.retry_base_delay_ms),
        }
    }
}

impl RetryConfig {
    /// 第 `attempt` 次重试前的等待时间（毫秒），attempt 从 1 开始
    ///
    /// base * 2^(attempt-1)，封顶 max_delay_ms，再加 0~25% 随机抖动
    pub fn backoff_ms(&self, attempt: u32) -> u64 {
        use rand::RngExt;

        let exponent = attempt.saturating_sub(1).min(32);
        let capped = self
            .base_delay_ms
            .saturating_mul(1u64 << exponent)
            .min(self.max_delay_ms);
        let jitter = rand::rng().random_range(0..=capped / 4);
        capped.saturating_add(jitter)
    }
}

/// 判断数据库错误是否值得重试
pub fn is_retryable_error(err: &DbErr) -> bool {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
        DbErr::Exec(runtime) | DbErr::Query(runtime) => is_transient(runtime),
        _ => false,
    }
}

fn is_transient(err: &RuntimeErr) -> bool {
    let message = match err {
        RuntimeErr::SqlxError(sqlx_err) => {
            if let Some(code) = sqlx_err.as_database_error().and_then(|e| e.code()) {
                let code: &str = &code;
                return TRANSIENT_CODES.contains(&code);
            }
            sqlx_err.to_string()
        }
        RuntimeErr::Internal(msg) => msg.clone(),
        #[allow(unreachable_patterns)]
        _ => return false,
    };

    let message = message.to_lowercase();
    TRANSIENT_MESSAGES.iter().any(|m| message.contains(m))
}

/// 带重试地执行数据库操作
///
/// `operation` 每次尝试都会被重新调用，因此必须可以安全地重复执行。
pub async fn with_retry<T, F, Fut>(
    operation_name: &str,
    config: RetryConfig,
    mut operation: F,
) -> Result<T, DbErr>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbErr>>,
{
    let mut attempt = 0;
    loop {
        let err = match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!("{} succeeded after {} retries", operation_name, attempt);
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if !is_retryable_error(&err) {
            debug!("{} failed: {}", operation_name, err);
            return Err(err);
        }
        if attempt >= config.max_retries {
            warn!(
                "{} failed after {} attempts: {}",
                operation_name,
                attempt + 1,
                err
            );
            return Err(err);
        }

        attempt += 1;
        let delay = config.backoff_ms(attempt);
        warn!(
            "{} hit a transient error (attempt {}/{}): {}; retrying in {} ms",
            operation_name,
            attempt,
            config.max_retries + 1,
            err,
            delay
        );
        sleep(Duration::from_millis(delay)).await;
    }
}
