//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "FGUIDE_LOG";

const LOG_FILE_NAME: &str = "fguide.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/flutter-guide/logs/` because the TUI
/// owns stdout. Log level is controlled by the `FGUIDE_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// FGUIDE_LOG=debug fguide
/// FGUIDE_LOG=fguide_app=trace fguide
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for everything else
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("fguide=info,fguide_core=info,fguide_app=info,fguide_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Flutter Guide starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("flutter-guide").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_directory() {
        let path = get_current_log_file();
        assert!(path.ends_with("flutter-guide/logs/fguide.log"));
    }
}
