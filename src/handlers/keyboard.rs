//! Rendering dialogue replies as Telegram messages

use teloxide::{
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove},
};

use crate::state::{Reply, ReplyKeyboard};
use crate::utils::errors::Result;

/// One-time, resized reply keyboard with one choice per row
pub fn choices_keyboard(choices: &[String]) -> KeyboardMarkup {
    KeyboardMarkup::new(choices.iter().map(|choice| vec![KeyboardButton::new(choice.clone())]))
        .one_time_keyboard()
        .resize_keyboard()
}

/// Send a dialogue reply with the keyboard change it asks for
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    let request = bot.send_message(chat_id, reply.text.clone());

    match &reply.keyboard {
        ReplyKeyboard::Unchanged => request.await?,
        ReplyKeyboard::Choices(choices) => request.reply_markup(choices_keyboard(choices)).await?,
        ReplyKeyboard::Remove => request.reply_markup(KeyboardRemove::new()).await?,
    };

    Ok(())
}
