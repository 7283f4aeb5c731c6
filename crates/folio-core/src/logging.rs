//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The interactive page owns the terminal, so logs always go to a file under
//! `${FOLIO_HOME}/logs` through a non-blocking `tracing-appender` writer.
//!
//! Filter resolution order:
//! 1. `FOLIO_LOG` environment variable (any `EnvFilter` directive)
//! 2. `-v` count on the command line
//! 3. `[log] level` in config.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::paths;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// File name inside the logs directory.
pub const LOG_FILE_NAME: &str = "folio.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used for the folio crates when `FOLIO_LOG` is unset.
    pub level: String,
    pub log_dir: PathBuf,
}

impl LogConfig {
    /// Builds the config from the `-v` count and the configured level.
    ///
    /// - 0: configured level
    /// - 1: debug
    /// - 2+: trace
    pub fn from_verbosity(verbosity: u8, configured: &str) -> Self {
        let level = match verbosity {
            0 => configured.trim().to_ascii_lowercase(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
        Self {
            level,
            log_dir: paths::logs_dir(),
        }
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = dir;
        self
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Filter directive used when `FOLIO_LOG` is unset.
    /// Other crates stay at warn.
    pub fn directive(&self) -> String {
        format!(
            "warn,folio={level},folio_cli={level},folio_core={level},folio_tui={level}",
            level = self.level
        )
    }
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the level is not a
/// valid directive, or a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", config.log_dir.display()))?;

    let filter = build_env_filter(config)?;
    let appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn build_env_filter(config: &LogConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(config.directive())
        .with_context(|| format!("Invalid log level '{}'", config.level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_configured_level() {
        assert_eq!(LogConfig::from_verbosity(0, " Warn ").level, "warn");
        assert_eq!(LogConfig::from_verbosity(1, "warn").level, "debug");
        assert_eq!(LogConfig::from_verbosity(3, "warn").level, "trace");
    }

    #[test]
    fn test_directive_scopes_level_to_folio_crates() {
        let config = LogConfig::from_verbosity(1, "info");
        let directive = config.directive();
        assert!(directive.starts_with("warn,"));
        assert!(directive.contains("folio_tui=debug"));
        assert!(EnvFilter::try_new(directive).is_ok());
    }

    #[test]
    fn test_log_file_lives_in_log_dir() {
        let config =
            LogConfig::from_verbosity(0, "info").with_log_dir(PathBuf::from("/tmp/folio-logs"));
        assert_eq!(
            config.log_file(),
            PathBuf::from("/tmp/folio-logs").join(LOG_FILE_NAME)
        );
    }
}
