//! Structured Logger
//!
//! Wraps `tracing` with a stderr console layer, an optional rolling file
//! layer, and environment-based level control.

use std::path::PathBuf;

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// File name prefix for the rolling log: `armonia.log.YYYY-MM-DD`.
const LOG_FILE_PREFIX: &str = "armonia.log";

#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Rolling file log directory; console only when `None`.
    pub directory: Option<PathBuf>,
    /// File log as NDJSON rather than plain text.
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            json: true,
        }
    }
}

/// Initialize the global structured logger.
///
/// Fails only when the log directory cannot be set up. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn init_logger(settings: &LogSettings) -> Result<(), InitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let file_appender = settings
        .directory
        .as_ref()
        .map(|dir| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(dir)
        })
        .transpose()?;

    let file_layer = file_appender.map(|appender| {
        let layer = fmt::layer().with_writer(appender).with_ansi(false);
        if settings.json {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_log_to_console_only() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, "info");
        assert!(settings.directory.is_none());
        assert!(settings.json);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        let dir = std::env::temp_dir().join("armonia-logger-test");
        let settings = LogSettings {
            level: "debug".into(),
            directory: Some(dir),
            json: false,
        };
        init_logger(&settings).unwrap();
        init_logger(&settings).unwrap();
        tracing::debug!("logger initialised twice");
    }
}
