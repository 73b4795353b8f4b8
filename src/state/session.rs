//! Dialogue session state
//!
//! A session tracks where a user is in the story questionnaire and the
//! answers collected so far.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Child, SentenceLength, StoryLength, StoryRequest};

/// Steps of the questionnaire, in the only order they can be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DialogueStep {
    Category,
    Topic,
    Length,
    SentencesPerParagraph,
    SentenceLength,
    NumChildren,
    ChildDetails,
}

impl DialogueStep {
    /// The step that follows this one; `ChildDetails` repeats until the draft is complete
    pub fn next(self) -> Option<Self> {
        match self {
            DialogueStep::Category => Some(DialogueStep::Topic),
            DialogueStep::Topic => Some(DialogueStep::Length),
            DialogueStep::Length => Some(DialogueStep::SentencesPerParagraph),
            DialogueStep::SentencesPerParagraph => Some(DialogueStep::SentenceLength),
            DialogueStep::SentenceLength => Some(DialogueStep::NumChildren),
            DialogueStep::NumChildren => Some(DialogueStep::ChildDetails),
            DialogueStep::ChildDetails => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialogueStep::Category => "category",
            DialogueStep::Topic => "topic",
            DialogueStep::Length => "length",
            DialogueStep::SentencesPerParagraph => "sentences_per_paragraph",
            DialogueStep::SentenceLength => "sentence_length",
            DialogueStep::NumChildren => "num_children",
            DialogueStep::ChildDetails => "child_details",
        }
    }
}

impl std::fmt::Display for DialogueStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers collected so far; fields fill in as the dialogue advances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub category: Option<String>,
    pub topic: Option<String>,
    pub story_length: Option<StoryLength>,
    pub sentences_per_paragraph: Option<String>,
    pub sentence_length: Option<SentenceLength>,
    pub expected_children: Option<u8>,
    pub children: Vec<Child>,
}

impl StoryDraft {
    /// Whether every expected child has been described
    pub fn is_complete(&self) -> bool {
        matches!(self.expected_children, Some(expected) if self.children.len() == expected as usize)
    }

    /// Assemble the final request once the draft is complete
    pub fn to_request(&self) -> Option<StoryRequest> {
        if !self.is_complete() {
            return None;
        }

        Some(StoryRequest {
            category: self.category.clone()?,
            topic: self.topic.clone()?,
            story_length: self.story_length?,
            sentences_per_paragraph: self.sentences_per_paragraph.clone()?,
            sentence_length: self.sentence_length?,
            expected_children: self.expected_children?,
            children: self.children.clone(),
        })
    }
}

/// Per-user dialogue session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Current step
    pub step: DialogueStep,
    /// Collected answers
    pub draft: StoryDraft,
    /// When `/start` created this session
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Fresh session positioned at the first step
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            step: DialogueStep::Category,
            draft: StoryDraft::default(),
            started_at: Utc::now(),
        }
    }

    /// Move to the following step; never goes backwards
    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }
}
