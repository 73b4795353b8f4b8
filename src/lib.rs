//! StoryBuddy Telegram Bot
//!
//! A Telegram bot that walks a user through a short questionnaire about the
//! story they want, then asks external text and image generation services for
//! a personalised children's story and delivers it back over the chat.

#![allow(non_snake_case)]

pub mod config;
pub mod formatter;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StoryBuddyError, GenerationError, Result};

// Re-export main components for easy access
pub use services::{DialogueService, ServiceFactory, StoryService};
pub use state::{DialogueMachine, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
