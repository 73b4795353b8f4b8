//! Story questionnaire state machine
//!
//! Validates each answer against the option catalog, stores the normalised
//! value in the session draft and produces the next prompt. The machine is
//! transport-agnostic: it returns [`Reply`] values that the Telegram handlers
//! render into messages and keyboards.

use crate::models::{Child, StoryRequest};
use super::catalog::OptionCatalog;
use super::prompts;
use super::session::{DialogueStep, Session};

/// Keyboard change requested alongside a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKeyboard {
    /// Leave whatever keyboard the user currently has
    Unchanged,
    /// Offer a restricted list of choices, one per row
    Choices(Vec<String>),
    /// Remove the custom keyboard so the user can type freely
    Remove,
}

/// Outbound message produced by the dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: ReplyKeyboard,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), keyboard: ReplyKeyboard::Unchanged }
    }

    pub fn with_choices(text: impl Into<String>, choices: Vec<String>) -> Self {
        Self { text: text.into(), keyboard: ReplyKeyboard::Choices(choices) }
    }

    pub fn removing_keyboard(text: impl Into<String>) -> Self {
        Self { text: text.into(), keyboard: ReplyKeyboard::Remove }
    }
}

/// Result of feeding one input into the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Input accepted; the session moved on (or stored another child)
    Advanced(Reply),
    /// Input rejected; the session is untouched
    Rejected(Reply),
    /// The last expected child was stored and the request is ready
    Completed(StoryRequest),
}

/// The questionnaire state machine
#[derive(Debug, Clone, Default)]
pub struct DialogueMachine {
    catalog: OptionCatalog,
}

impl DialogueMachine {
    pub fn new() -> Self {
        Self { catalog: OptionCatalog::new() }
    }

    /// Prompt sent when a new session starts
    pub fn start_reply(&self) -> Reply {
        Reply::with_choices(prompts::WELCOME, self.catalog.category_labels())
    }

    /// Apply `input` to the session's current step
    ///
    /// Every branch validates before writing, so a rejected input leaves the
    /// session exactly as it was.
    pub fn advance(&self, session: &mut Session, input: &str) -> StepOutcome {
        match session.step {
            DialogueStep::Category => {
                let Some(category) = self.catalog.category(input) else {
                    return StepOutcome::Rejected(Reply::text(prompts::INVALID_CATEGORY));
                };
                session.draft.category = Some(category.to_string());
                session.advance();
                StepOutcome::Advanced(Reply::with_choices(prompts::ASK_TOPIC, self.catalog.topic_labels()))
            }
            DialogueStep::Topic => {
                let Some(topic) = self.catalog.topic(input) else {
                    return StepOutcome::Rejected(Reply::text(prompts::INVALID_TOPIC));
                };
                session.draft.topic = Some(topic.to_string());
                session.advance();
                StepOutcome::Advanced(Reply::with_choices(prompts::ASK_LENGTH, self.catalog.story_length_labels()))
            }
            DialogueStep::Length => {
                let Some(length) = self.catalog.story_length(input) else {
                    return StepOutcome::Rejected(Reply::text(prompts::INVALID_LENGTH));
                };
                session.draft.story_length = Some(length);
                session.advance();
                StepOutcome::Advanced(Reply::with_choices(
                    prompts::ASK_SENTENCES_PER_PARAGRAPH,
                    self.catalog.sentences_per_paragraph_labels(),
                ))
            }
            DialogueStep::SentencesPerParagraph => {
                let Some(count) = self.catalog.sentences_per_paragraph(input) else {
                    return StepOutcome::Rejected(Reply::text(prompts::INVALID_SENTENCES_PER_PARAGRAPH));
                };
                session.draft.sentences_per_paragraph = Some(count.to_string());
                session.advance();
                StepOutcome::Advanced(Reply::with_choices(
                    prompts::ASK_SENTENCE_LENGTH,
                    self.catalog.sentence_length_labels(),
                ))
            }
            DialogueStep::SentenceLength => {
                let Some(length) = self.catalog.sentence_length(input) else {
                    return StepOutcome::Rejected(Reply::text(prompts::INVALID_SENTENCE_LENGTH));
                };
                session.draft.sentence_length = Some(length);
                session.advance();
                StepOutcome::Advanced(Reply::removing_keyboard(prompts::ASK_NUM_CHILDREN))
            }
            DialogueStep::NumChildren => {
                let Some(count) = self.catalog.children_count(input) else {
                    return StepOutcome::Rejected(Reply::text(prompts::INVALID_NUM_CHILDREN));
                };
                session.draft.expected_children = Some(count);
                session.draft.children.clear();
                session.advance();
                StepOutcome::Advanced(Reply::text(prompts::ask_first_child()))
            }
            DialogueStep::ChildDetails => self.add_child(session, input),
        }
    }

    fn add_child(&self, session: &mut Session, input: &str) -> StepOutcome {
        let Some(child) = Child::parse(input) else {
            return StepOutcome::Rejected(Reply::text(prompts::INVALID_CHILD_DETAILS));
        };

        session.draft.children.push(child);

        match session.draft.to_request() {
            Some(request) => StepOutcome::Completed(request),
            None => StepOutcome::Advanced(Reply::text(prompts::ask_next_child(
                session.draft.children.len() + 1,
            ))),
        }
    }
}
