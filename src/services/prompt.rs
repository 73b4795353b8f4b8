//! Story request assembler
//!
//! Renders a completed [`StoryRequest`] into the natural-language prompts
//! sent to the text and image services.

use crate::models::{describe_children, Child, StoryRequest};

/// Prompt for the text service
pub fn story_prompt(request: &StoryRequest) -> String {
    format!(
        "Create a {length} personalised {category} story about {topic}, including the following children: {children}. \
         Story must have {sentences} sentences per paragraph and make the sentences {sentence_length}. \
         Only show me the Title of the story and the Story. \
         Respond in HTML using <p> for paragraphs.",
        length = request.story_length.code(),
        category = request.category,
        topic = request.topic,
        children = request.children_description(),
        sentences = request.sentences_per_paragraph,
        sentence_length = request.sentence_length.code(),
    )
}

/// Prompt for the image service, built from the extracted title
pub fn illustration_prompt(title: &str, children: &[Child]) -> String {
    format!(
        "Create a cute and heartwarming illustration image for the story titled: {}. For these characters: {},",
        title,
        describe_children(children),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SentenceLength, StoryLength};

    fn request() -> StoryRequest {
        StoryRequest {
            category: "Fantasy".to_string(),
            topic: "Magic".to_string(),
            story_length: StoryLength::Medium,
            sentences_per_paragraph: "3".to_string(),
            sentence_length: SentenceLength::Short,
            expected_children: 1,
            children: vec![Child::parse("Mia, 5, female, brown, blue, tan").unwrap()],
        }
    }

    #[test]
    fn test_story_prompt_embeds_answers() {
        let prompt = story_prompt(&request());
        assert!(prompt.starts_with("Create a medium personalised Fantasy story about Magic"));
        assert!(prompt.contains("Mia (5 years old, female, Hair: brown, Eyes: blue, Skin: tan)"));
        assert!(prompt.contains("3 sentences per paragraph"));
        assert!(prompt.contains("make the sentences short."));
        assert!(prompt.ends_with("Only show me the Title of the story and the Story. Respond in HTML using <p> for paragraphs."));
    }

    #[test]
    fn test_illustration_prompt() {
        let request = request();
        let prompt = illustration_prompt("My Tale", &request.children);
        assert_eq!(
            prompt,
            "Create a cute and heartwarming illustration image for the story titled: My Tale. \
             For these characters: Mia (5 years old, female, Hair: brown, Eyes: blue, Skin: tan),"
        );
    }
}
