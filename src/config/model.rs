//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the catalog REST API lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every collection path is appended to (e.g. `http://localhost:3000/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format for the "last loaded" time in the status bar.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Seconds a notice stays visible before it hides itself.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            notice_secs: default_notice_secs(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive, e.g. `info` or `anicat=debug,reqwest=warn`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}
fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_notice_secs() -> u64 {
    4
}
fn default_log_dir() -> String {
    "~/.local/share/anicat/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
