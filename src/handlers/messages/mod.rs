//! Message handlers module
//!
//! Handles incoming text messages by feeding them into the story dialogue

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::delivery::TelegramSink;
use crate::handlers::keyboard::send_reply;
use crate::services::{InputResult, ServiceFactory};
use crate::utils::logging::log_anonymous_message;
use crate::utils::errors::Result;

/// Handle incoming text messages
pub async fn handle_message(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        log_anonymous_message(msg.chat.id.0);
        return Ok(());
    };

    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = user_id, chat_id = ?chat_id, "Processing message");

    let story_service = services.story_service.clone();
    let sink = TelegramSink::new(bot.clone(), chat_id);

    let result = services.dialogue_service.handle_input(user_id, text, move |request| {
        tokio::spawn(async move {
            story_service.deliver(user_id, &request, &sink).await;
        });
    });

    match result {
        InputResult::Reply(reply) => send_reply(&bot, chat_id, &reply).await,
        InputResult::Dispatched => Ok(()),
    }
}
