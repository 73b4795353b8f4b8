//! In-process fakes for the generation gateway and the outbound sink

use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use StoryBuddy::services::{ImageGenerator, ImageOutcome, StorySink, TextGenerator};
use StoryBuddy::utils::errors::{GenerationError, GenerationResult, Result};

/// Text generator returning a canned response and recording prompts
#[derive(Clone)]
pub struct FakeTextGenerator {
    response: Arc<dyn Fn() -> GenerationResult<String> + Send + Sync>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeTextGenerator {
    pub fn returning(text: &str) -> Self {
        let text = text.to_string();
        Self {
            response: Arc::new(move || Ok(text.clone())),
            prompts: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Arc::new(|| Err(GenerationError::AbnormalClose { code: 1011, reason: "boom".to_string() })),
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.response)()
    }
}

/// Image generator returning a canned outcome and recording prompts
#[derive(Clone)]
pub struct FakeImageGenerator {
    outcome: Option<ImageOutcome>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeImageGenerator {
    pub fn ready(url: &str) -> Self {
        Self { outcome: Some(ImageOutcome::Ready(url.to_string())), prompts: Arc::default() }
    }

    pub fn unavailable() -> Self {
        Self { outcome: Some(ImageOutcome::Unavailable), prompts: Arc::default() }
    }

    /// Fails as if the HTTP request errored
    pub fn failing() -> Self {
        Self { outcome: None, prompts: Arc::default() }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<ImageOutcome> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcome
            .clone()
            .ok_or_else(|| GenerationError::ImageRequestFailed("HTTP 500: down".to_string()))
    }
}

/// Message recorded by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Text(String),
    Html(String),
    Photo { url: String, caption: String },
}

/// Sink that records everything it is asked to send
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorySink for RecordingSink {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage::Text(text.to_string()));
        Ok(())
    }

    async fn send_html(&self, html: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage::Html(html.to_string()));
        Ok(())
    }

    async fn send_photo(&self, url: &str, caption_html: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage::Photo {
            url: url.to_string(),
            caption: caption_html.to_string(),
        });
        Ok(())
    }
}
