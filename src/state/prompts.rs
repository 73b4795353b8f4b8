//! Dialogue texts sent to the user

pub const WELCOME: &str = "Welcome to the Story Generator! 📖\nLet's create a fun story. First, choose a category:";
pub const ASK_TOPIC: &str = "Great! Now select a topic:";
pub const ASK_LENGTH: &str = "How long should the story be?";
pub const ASK_SENTENCES_PER_PARAGRAPH: &str = "How many sentences per paragraph?";
pub const ASK_SENTENCE_LENGTH: &str = "How long should the sentences be?";
pub const ASK_NUM_CHILDREN: &str = "How many children are in the story? (Enter a number between 1 and 10)";

pub const INVALID_CATEGORY: &str = "Please select a valid category from the keyboard.";
pub const INVALID_TOPIC: &str = "Please select a valid topic.";
pub const INVALID_LENGTH: &str = "Please select a valid length.";
pub const INVALID_SENTENCES_PER_PARAGRAPH: &str = "Please select a valid number.";
pub const INVALID_SENTENCE_LENGTH: &str = "Please select a valid option.";
pub const INVALID_NUM_CHILDREN: &str = "Please enter a valid number between 1 and 10.";
pub const INVALID_CHILD_DETAILS: &str =
    "Please provide all 6 details separated by commas:\nName, Age, Gender, Hair Color, Eye Color, Skin Tone";

pub const NO_SESSION: &str = "Please type /start to begin a new story.";

pub const HELP: &str = "📖 Story Generator Help\n\n\
    /start - Create a new personalised story\n\
    /help - Show this help message\n\n\
    Answer each question using the keyboard, then describe every child in the story.";

/// First request for child details, including the expected format
pub fn ask_first_child() -> String {
    "Please enter details for Child 1 in this format:\n\
     Name, Age, Gender, Hair Color, Eye Color, Skin Tone\n\n\
     Example: Raia, 3, female, black, gray, brown"
        .to_string()
}

/// Confirmation after a child is stored, asking for the next one
pub fn ask_next_child(number: usize) -> String {
    format!("Saved! Now enter details for Child {}:", number)
}
