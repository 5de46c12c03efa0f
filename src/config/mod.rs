pub mod model;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{ApiConfig, AppConfig, LoggingConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("anicat")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    validate(&config).with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Upper bound for `ui.notice_secs`.
pub const MAX_NOTICE_SECS: u64 = 3600;

/// Rejects values that parse but would break the UI later.
pub fn validate(config: &AppConfig) -> Result<()> {
    let format = &config.ui.timestamp_format;
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("ui.timestamp_format {format:?} is not a valid chrono format");
    }
    if config.ui.notice_secs > MAX_NOTICE_SECS {
        bail!(
            "ui.notice_secs must be at most {MAX_NOTICE_SECS}, got {}",
            config.ui.notice_secs
        );
    }
    Ok(())
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("anicat-no-such-dir").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("anicat-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = std::fs::remove_file(&path);
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("anicat-{name}-{}.toml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_bad_timestamp_format_is_rejected() {
        let path = write_temp("fmt", "[ui]\ntimestamp_format = \"%Q\"\n");
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("timestamp_format"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_notice_secs_is_bounded() {
        let path = write_temp("ttl", "[ui]\nnotice_secs = 999999\n");
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("notice_secs"));
        let _ = std::fs::remove_file(&path);

        let path = write_temp("ok", "[ui]\nnotice_secs = 10\ntimestamp_format = \"%d/%m %H:%M\"\n");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.ui.notice_secs, 10);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/anicat"), PathBuf::from("/var/log/anicat"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
