//! Start command handler
//!
//! Handles the /start command, which opens a fresh story questionnaire

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::keyboard::send_reply;
use crate::services::ServiceFactory;
use crate::utils::errors::{Result, StoryBuddyError};

/// Handle /start command - (re)creates the user's session and asks for a category
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        StoryBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = user_id, chat_id = ?chat_id, "Processing /start command");

    let reply = services.dialogue_service.start(user_id);
    send_reply(&bot, chat_id, &reply).await
}
