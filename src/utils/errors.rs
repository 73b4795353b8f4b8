//! Error handling for StoryBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for StoryBuddy application
#[derive(Error, Debug)]
pub enum StoryBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Story generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by the external text and image generation services
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Text stream failed: {0}")]
    StreamFailed(String),

    #[error("Text stream closed with code {code}: {reason}")]
    AbnormalClose { code: u16, reason: String },

    #[error("Text stream ended without a close frame")]
    StreamEnded,

    #[error("Image request failed: {0}")]
    ImageRequestFailed(String),
}

/// Result type alias for StoryBuddy operations
pub type Result<T> = std::result::Result<T, StoryBuddyError>;

/// Result type alias for generation gateway operations
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

impl StoryBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoryBuddyError::Telegram(_) => true,
            StoryBuddyError::Generation(_) => true,
            StoryBuddyError::Config(_) => false,
            StoryBuddyError::ConfigLoad(_) => false,
            StoryBuddyError::UrlParse(_) => false,
            StoryBuddyError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StoryBuddyError::Config(_) => ErrorSeverity::Critical,
            StoryBuddyError::ConfigLoad(_) => ErrorSeverity::Critical,
            StoryBuddyError::Generation(_) => ErrorSeverity::Warning,
            StoryBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
