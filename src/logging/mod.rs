//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `anicat_<date>.log` in the configured log directory
//! (default: `~/.local/share/anicat/logs/`).

use crate::config::{expand_home, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn log_file_name(date: NaiveDate) -> String {
    format!("anicat_{}.log", date.format("%Y-%m-%d"))
}

/// Installs the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "anicat_2024-03-09.log");
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert_eq!(init(&config).unwrap(), None);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: std::env::temp_dir().display().to_string(),
            level: "anicat=notalevel".to_string(),
        };
        assert!(init(&config).is_err());
    }
}
