//! Story generation and delivery
//!
//! Runs the generation flow for a completed request: text first, then the
//! illustration, then the story body in message-sized chunks. Any failure is
//! caught once at the top, logged, and reported to the user with a single
//! apology. Nothing is retried.

use std::sync::Arc;
use async_trait::async_trait;
use teloxide::utils::html;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::config::Settings;
use crate::formatter::format_story;
use crate::models::StoryRequest;
use crate::utils::errors::{Result, StoryBuddyError};
use crate::utils::logging::{log_api_error, log_generation_event};
use super::generation::{ImageClient, ImageGenerator, ImageOutcome, StreamingTextClient, TextGenerator};
use super::prompt::{illustration_prompt, story_prompt};

pub const GENERATING_MESSAGE: &str = "🌟 Generating your story... This might take a moment.";
pub const PAINTING_MESSAGE: &str = "🎨 Painting a picture for your story...";
pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong while generating the story. Please try again.";

/// Outbound port for a single chat
#[async_trait]
pub trait StorySink: Send + Sync {
    /// Send plain text
    async fn send_text(&self, text: &str) -> Result<()>;
    /// Send HTML-formatted text
    async fn send_html(&self, html: &str) -> Result<()>;
    /// Send an image by URL with an HTML caption
    async fn send_photo(&self, url: &str, caption_html: &str) -> Result<()>;
}

/// How a delivery attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    Failed,
}

/// Story generation service
#[derive(Clone)]
pub struct StoryService {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
    max_chunk_chars: usize,
}

impl StoryService {
    /// Create a StoryService over arbitrary generators
    pub fn new(
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
        max_chunk_chars: usize,
    ) -> Self {
        Self { text, image, max_chunk_chars }
    }

    /// Create a StoryService with the production clients
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let text = StreamingTextClient::new(&settings.generation.text);
        let image = ImageClient::new(&settings.generation.image)?;

        Ok(Self::new(Arc::new(text), Arc::new(image), settings.delivery.max_chunk_chars))
    }

    /// Generate the story for `request` and send it through `sink`
    pub async fn deliver<S>(&self, user_id: i64, request: &StoryRequest, sink: &S) -> DeliveryStatus
    where
        S: StorySink + ?Sized,
    {
        let request_id = Uuid::new_v4();
        let span = info_span!("story_generation", %request_id, user_id);

        async move {
            log_generation_event(user_id, "started", Some(&request.category));

            match self.generate_and_send(user_id, request, sink).await {
                Ok(()) => {
                    log_generation_event(user_id, "delivered", None);
                    DeliveryStatus::Delivered
                }
                Err(e) => {
                    error!(user_id = user_id, error = %e, severity = %e.severity(), "Story generation failed");
                    if let Err(send_error) = sink.send_text(FAILURE_MESSAGE).await {
                        error!(user_id = user_id, error = %send_error, "Failed to send failure notice");
                    }
                    DeliveryStatus::Failed
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn generate_and_send<S>(&self, user_id: i64, request: &StoryRequest, sink: &S) -> Result<()>
    where
        S: StorySink + ?Sized,
    {
        sink.send_text(GENERATING_MESSAGE).await?;

        let raw = self
            .text
            .generate(&story_prompt(request))
            .await
            .map_err(|e| {
                log_api_error("text_generation", &e.to_string(), None);
                StoryBuddyError::from(e)
            })?;

        let story = format_story(&raw);
        info!(user_id = user_id, title = %story.title, body_chars = story.body.chars().count(), "Story text generated");

        sink.send_text(PAINTING_MESSAGE).await?;

        let image = self
            .image
            .generate(&illustration_prompt(&story.title, &request.children))
            .await
            .map_err(|e| {
                log_api_error("image_generation", &e.to_string(), Some(&story.title));
                StoryBuddyError::from(e)
            })?;

        let caption = format!("<b>{}</b>", html::escape(&story.title));
        match image {
            ImageOutcome::Ready(url) => sink.send_photo(&url, &caption).await?,
            ImageOutcome::Unavailable => sink.send_html(&caption).await?,
        }

        for chunk in story.chunks(self.max_chunk_chars) {
            sink.send_text(chunk).await?;
        }

        Ok(())
    }
}
