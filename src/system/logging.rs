//! Logging system initialization
//!
//! Sets up tracing according to the `[logging]` section. Console output goes
//! to stderr so command output on stdout stays clean.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{Result, VaultError};

const DEFAULT_LOG_FILE_NAME: &str = "linkvault.log";

/// Initialize logging system based on configuration
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered log lines are flushed on exit.
///
/// Calling this twice does not fail: the second subscriber is simply not
/// installed (tests create several stores in one process).
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let to_file = config.file.as_deref().is_some_and(|f| !f.is_empty());
    let writer = build_writer(config)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!to_file);

    let installed = match config.format {
        LogFormat::Json => subscriber_builder.json().try_init(),
        LogFormat::Text => subscriber_builder.try_init(),
    };
    if let Err(e) = installed {
        eprintln!("[WARN] logging already initialized: {}", e);
    }

    Ok(guard)
}

fn build_writer(config: &LoggingConfig) -> Result<Box<dyn std::io::Write + Send + Sync>> {
    let Some(log_file) = config.file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok(Box::new(std::io::stderr()));
    };

    let path = Path::new(log_file);
    if !config.enable_rotation {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                VaultError::file_operation(format!("Failed to open log file {}: {}", log_file, e))
            })?;
        return Ok(Box::new(file));
    }

    // 按天滚动
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let filename = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME);

    let appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix(filename.trim_end_matches(".log"))
        .filename_suffix("log")
        .max_log_files(config.max_backups.max(1) as usize)
        .build(dir)
        .map_err(|e| {
            VaultError::file_operation(format!("Failed to create rolling log appender: {}", e))
        })?;
    Ok(Box::new(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_file_writer_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vault.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            enable_rotation: false,
            ..Default::default()
        };

        let mut writer = build_writer(&config).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_rolling_writer_uses_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vault.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            enable_rotation: true,
            ..Default::default()
        };

        assert!(build_writer(&config).is_ok());
    }

    #[test]
    fn test_empty_file_name_falls_back_to_console() {
        let config = LoggingConfig {
            file: Some(String::new()),
            ..Default::default()
        };
        assert!(build_writer(&config).is_ok());
    }
}
