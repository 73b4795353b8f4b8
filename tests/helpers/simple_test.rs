//! Simple test infrastructure for basic testing
//!
//! This provides a minimal test setup that can work without external services

use std::sync::{Arc, Once};

use StoryBuddy::models::{Child, SentenceLength, StoryLength, StoryRequest};
use StoryBuddy::services::{ImageGenerator, StoryService, TextGenerator};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Story service over the given generators with the default chunk size
pub fn story_service(text: impl TextGenerator + 'static, image: impl ImageGenerator + 'static) -> StoryService {
    StoryService::new(Arc::new(text), Arc::new(image), 4000)
}

/// The request produced by the reference dialogue walk-through
pub fn sample_request() -> StoryRequest {
    StoryRequest {
        category: "Fantasy".to_string(),
        topic: "Magic".to_string(),
        story_length: StoryLength::Medium,
        sentences_per_paragraph: "3".to_string(),
        sentence_length: SentenceLength::Short,
        expected_children: 1,
        children: vec![Child::parse("Mia, 5, female, brown, blue, tan").expect("valid child line")],
    }
}
