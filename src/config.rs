//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::capture::PLACEHOLDER_MEDIA_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Local storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("glimmerly").to_string_lossy().to_string())
        .unwrap_or_else(|| "./glimmerly_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Session rules
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Skips granted per session
    #[serde(default = "default_daily_skips")]
    pub daily_skips: u32,

    /// Fixed RNG seed for reproducible draws
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_daily_skips() -> u32 {
    1
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            daily_skips: default_daily_skips(),
            seed: None,
        }
    }
}

/// Simulated capture device
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_capture_delay")]
    pub delay_ms: u64,

    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

fn default_capture_delay() -> u64 {
    1500
}

fn default_placeholder_url() -> String {
    PLACEHOLDER_MEDIA_URL.to_string()
}

impl CaptureConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_capture_delay(),
            placeholder_url: default_placeholder_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("glimmerly").join("config.toml")),
            Some(PathBuf::from("./glimmerly.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("GLIMMERLY_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(skips) = var("GLIMMERLY_DAILY_SKIPS") {
            match skips.parse() {
                Ok(n) => self.session.daily_skips = n,
                Err(_) => tracing::warn!("Ignoring invalid GLIMMERLY_DAILY_SKIPS: {}", skips),
            }
        }

        if let Some(delay) = var("GLIMMERLY_CAPTURE_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.capture.delay_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid GLIMMERLY_CAPTURE_DELAY_MS: {}", delay),
            }
        }

        if let Some(level) = var("GLIMMERLY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("GLIMMERLY_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Storage directory with a leading `~` expanded
    pub fn data_dir(&self) -> PathBuf {
        let raw = self.storage.data_dir.as_str();
        match (raw.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(raw),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Glimmerly Configuration
#
# Environment variables override these settings:
# - GLIMMERLY_DATA_DIR
# - GLIMMERLY_DAILY_SKIPS
# - GLIMMERLY_CAPTURE_DELAY_MS
# - GLIMMERLY_LOG_LEVEL
# - GLIMMERLY_LOG_FORMAT

[storage]
# Directory holding local_storage.json
data_dir = "~/.local/share/glimmerly"

[session]
# Skips granted per session
daily_skips = 1

# Fixed seed for reproducible glimmer draws
# seed = 42

[capture]
# Simulated recording time (ms)
delay_ms = 1500

# URL attached to every simulated capture
placeholder_url = "https://i.pravatar.cc/300?img=32"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.daily_skips, 1);
        assert_eq!(config.session.seed, None);
        assert_eq!(config.capture.delay(), Duration::from_millis(1500));
        assert_eq!(config.capture.placeholder_url, PLACEHOLDER_MEDIA_URL);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
            [session]
            seed = 7

            [capture]
            delay_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.session.seed, Some(7));
        assert_eq!(config.session.daily_skips, 1);
        assert_eq!(config.capture.delay_ms, 10);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_default_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.session.daily_skips, 1);
        assert_eq!(config.capture.delay_ms, 1500);
        assert_eq!(config.storage.data_dir, "~/.local/share/glimmerly");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GLIMMERLY_DATA_DIR", "/tmp/glimmerly"),
            ("GLIMMERLY_DAILY_SKIPS", "3"),
            ("GLIMMERLY_CAPTURE_DELAY_MS", "not-a-number"),
            ("GLIMMERLY_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/glimmerly"));
        assert_eq!(config.session.daily_skips, 3);
        assert_eq!(config.capture.delay_ms, 1500);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glimmerly.toml");
        std::fs::write(&path, "[session]\ndaily_skips = \"many\"\n").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
