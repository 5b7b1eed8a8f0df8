//! Logging configuration using tracing

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable controlling the log filter
pub const LOG_ENV: &str = "TSASSIST_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/ts-assistant/logs/` because the TUI
/// owns the terminal. Log level is controlled by `TSASSIST_LOG`.
///
/// # Examples
/// ```bash
/// TSASSIST_LOG=debug tsassist
/// TSASSIST_LOG=ts_assistant=trace tsassist
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "tsassist.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("ts_assistant=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "ts-assistant starting"
    );

    Ok(())
}

/// Get the log directory path
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("ts-assistant").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = log_directory();
        assert!(dir.ends_with("ts-assistant/logs"));
    }
}
