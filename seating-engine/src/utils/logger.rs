//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level when set. Production sessions
//! log JSON lines; everything else uses the compact human format.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::core::Config;

const LOG_FILE_PREFIX: &str = "seating-engine";

fn env_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")))
}

/// Initialize the logger at `info`, writing to stderr
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Writes to a daily rolling file under `log_dir` when that directory exists,
/// otherwise to stderr. A second call keeps the first subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_target(false)
        .with_thread_ids(false);

    match log_dir.map(Path::new).filter(|dir| dir.is_dir()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = builder.with_ansi(false).with_writer(appender).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}

/// Initialize the logger from a [`Config`]
pub fn init_logger_for(config: &Config) {
    if !config.is_production() {
        init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
        return;
    }

    let builder = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(Some(&config.log_level)))
        .with_current_span(false);
    match config.log_dir.as_deref().map(Path::new).filter(|dir| dir.is_dir()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = builder.with_writer(appender).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}
