//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{StoryBuddyError, Result};
use super::Settings;

/// Telegram rejects text messages longer than this many characters
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_text_config(&settings.generation.text)?;
    validate_image_config(&settings.generation.image)?;
    validate_delivery_config(&settings.delivery)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Non-fatal configuration problems worth logging at startup
pub fn settings_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    if settings.generation.image.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
        warnings.push(
            "Image API key is not set; illustration requests will be sent without `pk`".to_string()
        );
    }

    warnings
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(StoryBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate the streaming text endpoint
fn validate_text_config(config: &super::TextServiceConfig) -> Result<()> {
    let url = Url::parse(&config.stream_url)?;
    if !matches!(url.scheme(), "ws" | "wss") {
        return Err(StoryBuddyError::Config(
            format!("Text stream URL must use ws or wss, got: {}", url.scheme())
        ));
    }

    if config.app_id.is_empty() {
        return Err(StoryBuddyError::Config(
            "Text service app ID is required".to_string()
        ));
    }

    Ok(())
}

/// Validate the image endpoint
fn validate_image_config(config: &super::ImageServiceConfig) -> Result<()> {
    let url = Url::parse(&config.api_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(StoryBuddyError::Config(
            format!("Image API URL must use http or https, got: {}", url.scheme())
        ));
    }

    Ok(())
}

/// Validate delivery configuration
fn validate_delivery_config(config: &super::DeliveryConfig) -> Result<()> {
    if config.max_chunk_chars == 0 || config.max_chunk_chars > TELEGRAM_MESSAGE_LIMIT {
        return Err(StoryBuddyError::Config(
            format!("Max chunk size must be between 1 and {}", TELEGRAM_MESSAGE_LIMIT)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StoryBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StoryBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
