//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub app: AppConfig,
    pub gatherings: GatheringConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

/// General application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub max_user_name_length: usize,
}

/// Gathering rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatheringConfig {
    /// Upper bound for each per-position quota on a new listing
    pub max_position_count: u32,
    /// Whether a guest cancelling an application gives the slot back
    pub decrement_on_cancel: bool,
}

/// Seed dataset location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub file_name: String,
}

impl Settings {
    /// Load settings from defaults, an optional `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("HOOPBUDDY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::HoopBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "HoopBuddy".to_string(),
                max_user_name_length: 12,
            },
            gatherings: GatheringConfig {
                max_position_count: 10,
                decrement_on_cancel: false,
            },
            seed: SeedConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
                file_name: "hoopbuddy.log".to_string(),
            },
        }
    }
}
