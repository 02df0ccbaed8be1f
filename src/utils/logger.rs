//! 日志系统
//!
//! 提供统一的日志记录功能。日志写到标准错误，标准输出只留给进度信息。

use crate::config::DEFAULT_LOG_FILTER;
use anyhow::Result;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化日志系统
///
/// # Arguments
/// * `log_level` - 日志级别 (trace, debug, info, warn, error)，如果为 None 则使用环境变量 RUST_LOG
///
/// # Examples
/// ```no_run
/// use execladder::utils::logger::init_logger;
///
/// // 使用默认配置（从环境变量读取）
/// init_logger(None).unwrap();
///
/// // 指定日志级别
/// init_logger(Some("debug")).unwrap();
/// ```
pub fn init_logger(log_level: Option<&str>) -> Result<()> {
    // 优先使用参数指定的级别，其次使用 RUST_LOG 环境变量
    let env_filter = if let Some(level) = log_level {
        EnvFilter::try_new(level)?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(pid = std::process::id(), "Logger initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_rejected() {
        assert!(init_logger(Some("not=a=level")).is_err());
    }
}
