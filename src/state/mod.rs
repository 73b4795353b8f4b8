//! State management module
//!
//! This module handles the story questionnaire: option catalog, per-user
//! sessions, the in-memory session store and the dialogue state machine.

pub mod catalog;
pub mod dialogue;
pub mod prompts;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use catalog::OptionCatalog;
pub use dialogue::{DialogueMachine, Reply, ReplyKeyboard, StepOutcome};
pub use session::{DialogueStep, Session, StoryDraft};
pub use storage::SessionStore;
