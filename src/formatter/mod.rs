//! Response formatter
//!
//! Turns the raw markup returned by the text service into a title and a
//! plain-text body ready for chat delivery.

pub mod chunk;
pub mod markup;

use std::sync::OnceLock;
use regex::Regex;

pub use chunk::chunk_text;
pub use markup::{MarkupNode, to_plain_text};

/// Title used when the generated text has no heading
pub const DEFAULT_TITLE: &str = "A Wonderful Story";

/// Generated story split into its title and plain-text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedStory {
    pub title: String,
    pub body: String,
}

impl FormattedStory {
    /// Body split into chunks of at most `max_chars` characters
    pub fn chunks(&self, max_chars: usize) -> Vec<&str> {
        chunk_text(&self.body, max_chars)
    }
}

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<h1>(.*?)</h1>").expect("static heading pattern is valid"))
}

/// Extract the title and convert the remaining markup to plain text
///
/// Only the first single-line `<h1>` heading is used and removed.
pub fn format_story(raw: &str) -> FormattedStory {
    let pattern = heading_pattern();

    let title = pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let without_heading = pattern.replace(raw, "");

    FormattedStory {
        title,
        body: to_plain_text(&without_heading),
    }
}
