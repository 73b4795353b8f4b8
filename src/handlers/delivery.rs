//! Telegram implementation of the story sink

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, ParseMode},
};
use url::Url;

use crate::services::StorySink;
use crate::utils::errors::Result;

/// Sends story messages to one Telegram chat
#[derive(Clone)]
pub struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSink {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl StorySink for TelegramSink {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn send_html(&self, html: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, html)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn send_photo(&self, url: &str, caption_html: &str) -> Result<()> {
        let photo = InputFile::url(Url::parse(url)?);
        self.bot
            .send_photo(self.chat_id, photo)
            .caption(caption_html)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }
}
