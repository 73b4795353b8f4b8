//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;

/// Environment variable prefix for nested settings, e.g. `STORYBUDDY__BOT__TOKEN`
pub const ENV_PREFIX: &str = "STORYBUDDY";

/// Plain token variable accepted as an override
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub generation: GenerationConfig,
    pub delivery: DeliveryConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// External generation services
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub text: TextServiceConfig,
    pub image: ImageServiceConfig,
}

/// Streaming text generation endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextServiceConfig {
    pub stream_url: String,
    pub app_id: String,
}

/// Image generation endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageServiceConfig {
    pub api_url: String,
    pub api_key: Option<String>,
}

/// Outbound message delivery
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryConfig {
    pub max_chunk_chars: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self> {
        Self::load_from("config")
    }

    /// Load settings using `file` (without extension) as the optional config file
    pub fn load_from(file: &str) -> Result<Self> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("generation.text.stream_url", defaults.generation.text.stream_url)?
            .set_default("generation.text.app_id", defaults.generation.text.app_id)?
            .set_default("generation.image.api_url", defaults.generation.image.api_url)?
            .set_default("delivery.max_chunk_chars", defaults.delivery.max_chunk_chars as u64)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
            .set_override_option("bot.token", std::env::var(BOT_TOKEN_ENV).ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    /// Problems that do not stop startup but should be logged
    pub fn warnings(&self) -> Vec<String> {
        super::validation::settings_warnings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            generation: GenerationConfig {
                text: TextServiceConfig {
                    stream_url: "wss://backend.buildpicoapps.com/ask_ai_streaming".to_string(),
                    app_id: "everybody-once".to_string(),
                },
                image: ImageServiceConfig {
                    api_url: "https://backend.buildpicoapps.com/aero/run/image-generation-api".to_string(),
                    api_key: None,
                },
            },
            delivery: DeliveryConfig {
                max_chunk_chars: 4000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                json: false,
            },
        }
    }
}
