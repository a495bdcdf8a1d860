//! Application settings and configuration management

use crate::controller::OrderingPolicy;
use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Production endpoint of the map generation service
pub const DEFAULT_BASE_URL: &str = "https://ai-map-generator-6ea864cf7c85.herokuapp.com";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote generation service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Transport timeout. Unset means the HTTP client's own default (none).
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

/// Submission controller configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ControllerConfig {
    #[serde(default)]
    pub ordering: OrderingPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
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
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("service.base_url", DEFAULT_BASE_URL)?
            .set_default("controller.ordering", "arrival")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Load from configuration file
            .add_source(File::from(path.as_ref()).required(false))
            // Override with environment variables (prefixed with MAP_GENERATOR_)
            .add_source(
                Environment::with_prefix("MAP_GENERATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.service.base_url).map_err(|e| {
            AppError::Config(config::ConfigError::Message(format!(
                "Invalid service base URL '{}': {}",
                self.service.base_url, e
            )))
        })?;
        if !["http", "https"].contains(&url.scheme()) {
            return Err(AppError::Config(config::ConfigError::Message(format!(
                "Service base URL '{}' must use http or https",
                self.service.base_url
            ))));
        }

        if self.service.timeout_ms == Some(0) {
            return Err(AppError::Config(config::ConfigError::Message(
                "Service timeout cannot be 0".to_string(),
            )));
        }

        if !["json", "pretty"].contains(&self.logging.format.as_str()) {
            return Err(AppError::Config(config::ConfigError::Message(format!(
                "Invalid log format '{}'. Must be 'json' or 'pretty'",
                self.logging.format
            ))));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            controller: ControllerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
