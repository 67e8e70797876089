//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_PREFIX: &str = "garagem.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/garagem/logs/` because the terminal is
/// owned by the TUI. Log level is controlled by the `GARAGEM_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// GARAGEM_LOG=debug garagem
/// GARAGEM_LOG=garagem_app=trace garagem
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter = EnvFilter::try_from_env("GARAGEM_LOG")
        .unwrap_or_else(|_| EnvFilter::new("garagem=info,warn"));

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
        .init();

    tracing::info!("Garagem starting, logging to {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("garagem").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory();
        assert!(dir.ends_with("garagem/logs"));
    }
}
