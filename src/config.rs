use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_MIN_MATCH_SCORE;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub allocation: AllocationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllocationSettings {
    /// Minimum compatibility score for an allocation to be accepted.
    /// The canonical behavior uses 60; override with care.
    #[serde(default = "default_min_match_score")]
    pub min_match_score: f64,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            min_match_score: default_min_match_score(),
        }
    }
}

fn default_min_match_score() -> f64 {
    DEFAULT_MIN_MATCH_SCORE
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with HOMEALLOC__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. HOMEALLOC__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOMEALLOC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOMEALLOC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocation_settings() {
        let settings = AllocationSettings::default();
        assert_eq!(settings.min_match_score, 60.0);
    }

    #[test]
    fn test_default_server_settings() {
        let settings = ServerSettings::default();
        assert_eq!(settings.port, 8080);
        assert!(settings.workers.is_none());
    }

    #[test]
    fn test_default_logging() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, "json");
    }
}
