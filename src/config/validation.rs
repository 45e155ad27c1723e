//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{HoopBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_app_config(&settings.app)?;
    validate_gathering_config(&settings.gatherings)?;
    validate_seed_config(&settings.seed)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate general application configuration
fn validate_app_config(config: &super::AppConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(HoopBuddyError::Config(
            "Application name is required".to_string()
        ));
    }

    if config.max_user_name_length == 0 {
        return Err(HoopBuddyError::Config(
            "Max user name length must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate gathering rules
fn validate_gathering_config(config: &super::GatheringConfig) -> Result<()> {
    if config.max_position_count == 0 {
        return Err(HoopBuddyError::Config(
            "Max position count must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate seed configuration
fn validate_seed_config(config: &super::SeedConfig) -> Result<()> {
    if let Some(ref path) = config.path {
        if path.trim().is_empty() {
            return Err(HoopBuddyError::Config(
                "Seed path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(HoopBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(HoopBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(HoopBuddyError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}
