//! Option catalog
//!
//! Static choices offered and validated at each menu-driven dialogue step.

use crate::models::{SentenceLength, StoryLength};
use crate::utils::helpers::leading_token;

/// Story categories, in keyboard order
pub const CATEGORIES: [&str; 8] = [
    "Fairy Tales",
    "Animals",
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Adventure",
    "Sports",
    "School",
];

/// Story topics, in keyboard order
pub const TOPICS: [&str; 9] = [
    "Friendship",
    "Family",
    "Magic",
    "Space",
    "Nature",
    "History",
    "Heroes",
    "Holidays",
    "Travel",
];

/// Accepted sentence counts per paragraph
pub const SENTENCES_PER_PARAGRAPH: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Inclusive bounds for the number of children
pub const MIN_CHILDREN: u8 = 1;
pub const MAX_CHILDREN: u8 = 10;

/// Lookup and keyboard rendering for the static option lists
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionCatalog;

impl OptionCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn category(&self, input: &str) -> Option<&'static str> {
        CATEGORIES.iter().copied().find(|c| *c == input)
    }

    pub fn topic(&self, input: &str) -> Option<&'static str> {
        TOPICS.iter().copied().find(|t| *t == input)
    }

    pub fn story_length(&self, input: &str) -> Option<StoryLength> {
        StoryLength::from_label(input)
    }

    /// Only the leading space-delimited token is compared, so `"3 sentence(s)"` matches `"3"`
    pub fn sentences_per_paragraph(&self, input: &str) -> Option<&'static str> {
        let token = leading_token(input);
        SENTENCES_PER_PARAGRAPH.iter().copied().find(|s| *s == token)
    }

    pub fn sentence_length(&self, input: &str) -> Option<SentenceLength> {
        SentenceLength::from_label(input)
    }

    /// Number of children, accepting `1..=10` after trimming
    pub fn children_count(&self, input: &str) -> Option<u8> {
        let count: i64 = leading_integer(input)?;
        if (MIN_CHILDREN as i64..=MAX_CHILDREN as i64).contains(&count) {
            Some(count as u8)
        } else {
            None
        }
    }

    pub fn category_labels(&self) -> Vec<String> {
        CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    pub fn topic_labels(&self) -> Vec<String> {
        TOPICS.iter().map(|t| t.to_string()).collect()
    }

    pub fn story_length_labels(&self) -> Vec<String> {
        StoryLength::ALL.iter().map(|l| l.label().to_string()).collect()
    }

    pub fn sentences_per_paragraph_labels(&self) -> Vec<String> {
        SENTENCES_PER_PARAGRAPH
            .iter()
            .map(|s| format!("{} sentence(s)", s))
            .collect()
    }

    pub fn sentence_length_labels(&self) -> Vec<String> {
        SentenceLength::ALL.iter().map(|l| l.label().to_string()).collect()
    }
}

/// Parse an optionally signed run of leading digits after trimming whitespace
///
/// `"3 kids"` yields 3, `"abc"` yields `None`.
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    // Saturate absurdly long inputs; they are out of range either way
    digits[..end].parse::<i64>().ok().map(|n| n * sign).or_else(|| {
        (end > 0).then_some(i64::MAX * sign)
    })
}
