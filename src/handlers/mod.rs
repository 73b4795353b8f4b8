//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for dialogue input
//! - Keyboard rendering and the Telegram story sink

pub mod commands;
pub mod delivery;
pub mod keyboard;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use delivery::TelegramSink;
pub use messages::handle_message;
