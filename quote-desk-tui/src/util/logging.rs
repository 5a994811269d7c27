//! 日志初始化
//!
//! 终端处于备用屏幕时不能向 stdout/stderr 写日志，所以全部写入文件。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE: &str = "quote-desk.log";

/// 日志目录：`<data_local_dir>/quote-desk`
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("quote-desk")
}

/// 初始化文件日志
///
/// 默认级别为 `info`，可用 `RUST_LOG` 覆盖。
/// 返回的 guard 必须保留到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!("Logging to {}", dir.join(LOG_FILE).display());
    Ok(guard)
}
