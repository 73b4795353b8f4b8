//! Data models module
//!
//! This module contains the story request and child models collected by the dialogue.

pub mod child;
pub mod story;

pub use child::Child;
pub use story::{describe_children, SentenceLength, StoryLength, StoryRequest};
