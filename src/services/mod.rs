//! Services module
//!
//! This module contains business logic services

pub mod dialogue;
pub mod generation;
pub mod prompt;
pub mod story;

// Re-export commonly used services
pub use dialogue::{DialogueService, InputResult};
pub use generation::{ImageClient, ImageGenerator, ImageOutcome, StreamingTextClient, TextGenerator};
pub use story::{DeliveryStatus, StoryService, StorySink};

use crate::config::settings::Settings;
use crate::state::{DialogueMachine, SessionStore};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub dialogue_service: DialogueService,
    pub story_service: StoryService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let dialogue_service = DialogueService::new(SessionStore::new(), DialogueMachine::new());
        let story_service = StoryService::from_settings(settings)?;

        Ok(Self {
            dialogue_service,
            story_service,
        })
    }

    /// Health snapshot for logging
    pub fn health_check(&self) -> ServiceHealthStatus {
        ServiceHealthStatus {
            active_sessions: self.dialogue_service.store().len(),
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub active_sessions: usize,
}
