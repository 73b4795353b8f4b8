//! Story request model

use serde::{Deserialize, Serialize};
use super::child::Child;

/// Requested overall story length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl StoryLength {
    pub const ALL: [StoryLength; 3] = [StoryLength::Short, StoryLength::Medium, StoryLength::Long];

    /// Keyboard label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            StoryLength::Short => "Short (250 words)",
            StoryLength::Medium => "Medium (600 words)",
            StoryLength::Long => "Long (1000 words)",
        }
    }

    /// Short code stored in the request and used in prompts
    pub fn code(self) -> &'static str {
        match self {
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
        }
    }

    /// Look up a length by its exact keyboard label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|length| length.label() == label)
    }
}

/// Requested sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceLength {
    Short,
    Medium,
    Long,
}

impl SentenceLength {
    pub const ALL: [SentenceLength; 3] = [SentenceLength::Short, SentenceLength::Medium, SentenceLength::Long];

    pub fn label(self) -> &'static str {
        match self {
            SentenceLength::Short => "Short",
            SentenceLength::Medium => "Medium",
            SentenceLength::Long => "Long",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SentenceLength::Short => "short",
            SentenceLength::Medium => "medium",
            SentenceLength::Long => "long",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|length| length.label() == label)
    }
}

/// Fully assembled parameters for one story generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub category: String,
    pub topic: String,
    pub story_length: StoryLength,
    pub sentences_per_paragraph: String,
    pub sentence_length: SentenceLength,
    pub expected_children: u8,
    pub children: Vec<Child>,
}

impl StoryRequest {
    /// Descriptions of every child joined for prompt embedding
    pub fn children_description(&self) -> String {
        describe_children(&self.children)
    }
}

/// Join child descriptions with `", "`
pub fn describe_children(children: &[Child]) -> String {
    children
        .iter()
        .map(Child::describe)
        .collect::<Vec<_>>()
        .join(", ")
}
