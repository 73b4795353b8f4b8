//! Image generation client
//!
//! Issues a single JSON request per illustration and interprets the
//! service's `status` discriminant.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ImageServiceConfig;
use crate::utils::errors::{GenerationError, GenerationResult};
use crate::utils::helpers::truncate_text;
use super::ImageGenerator;

/// Status value reported by the image service on success
const SUCCESS_STATUS: &str = "success";

/// Image API request body
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest<'a> {
    pub prompt: &'a str,
}

/// Image API response structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl ImageResponse {
    /// Decode a 2xx body; anything that is not a JSON object decodes as empty
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// What the image service produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Illustration available at this URL
    Ready(String),
    /// The service answered but did not produce an image
    Unavailable,
}

impl From<ImageResponse> for ImageOutcome {
    fn from(response: ImageResponse) -> Self {
        match response.image_url {
            Some(url) if response.status.as_deref() == Some(SUCCESS_STATUS) && !url.is_empty() => {
                ImageOutcome::Ready(url)
            }
            _ => ImageOutcome::Unavailable,
        }
    }
}

/// HTTP client for the image generation service
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl ImageClient {
    /// Create a new ImageClient instance
    pub fn new(config: &ImageServiceConfig) -> GenerationResult<Self> {
        let client = Client::builder()
            .user_agent("StoryBuddy-Bot/1.0")
            .build()
            .map_err(|e| GenerationError::ImageRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, prompt: &str) -> GenerationResult<ImageOutcome> {
        debug!(url = %self.api_url, "Making image generation request");

        let mut request = self.client.post(&self.api_url).json(&ImageRequest { prompt });
        if let Some(key) = &self.api_key {
            request = request.query(&[("pk", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GenerationError::ImageRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ImageRequestFailed(
                format!("HTTP {}: {}", status, error_text)
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::ImageRequestFailed(e.to_string()))?;

        let outcome = ImageOutcome::from(ImageResponse::from_body(&body));
        if outcome == ImageOutcome::Unavailable {
            warn!(body = %truncate_text(&body, 200), "Image service did not return an image");
        }

        Ok(outcome)
    }
}
