//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "CODE_LAUNCHER_LOG";

const LOG_FILE_NAME: &str = "code-launcher.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/code-launcher/logs/`, never to the
/// terminal, since the launcher is usually started by a GUI host.
/// Log level is controlled by the `CODE_LAUNCHER_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CODE_LAUNCHER_LOG=debug code-launcher game/script.rpy
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("code_launcher=info,warn"));

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
        .try_init()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    tracing::debug!("Logging to {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("code-launcher").join("logs")
}

/// Get the log file path (the appender adds a date suffix when rotating)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}
