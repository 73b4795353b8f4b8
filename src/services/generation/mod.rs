//! Generation gateway
//!
//! Narrow request/response contracts for the external text and image
//! generation services, with the production clients behind them.

pub mod image;
pub mod text;

use async_trait::async_trait;
use crate::utils::errors::GenerationResult;

pub use image::{ImageClient, ImageOutcome};
pub use text::{collect_fragments, StreamingTextClient};

/// Produces story text for a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Resolve with the full generated text once the service signals normal completion
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;
}

/// Produces an illustration for a prompt
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenerationResult<ImageOutcome>;
}
