//! Child character model

use serde::{Deserialize, Serialize};

/// Number of comma-separated fields describing one child
pub const CHILD_FIELD_COUNT: usize = 6;

/// A child who appears in the story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub hair_color: String,
    pub eye_color: String,
    pub skin_tone: String,
}

impl Child {
    /// Parse `Name, Age, Gender, Hair Color, Eye Color, Skin Tone`
    ///
    /// Parts are trimmed; anything after the sixth part is ignored.
    /// Returns `None` when fewer than six parts are present.
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < CHILD_FIELD_COUNT {
            return None;
        }

        Some(Self {
            name: parts[0].to_string(),
            age: parts[1].to_string(),
            gender: parts[2].to_string(),
            hair_color: parts[3].to_string(),
            eye_color: parts[4].to_string(),
            skin_tone: parts[5].to_string(),
        })
    }

    /// Human-readable description used in generation prompts
    pub fn describe(&self) -> String {
        format!(
            "{} ({} years old, {}, Hair: {}, Eyes: {}, Skin: {})",
            self.name, self.age, self.gender, self.hair_color, self.eye_color, self.skin_tone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_exact_fields() {
        let child = Child::parse("Mia, 5, female, brown, blue, tan").unwrap();
        assert_eq!(child.name, "Mia");
        assert_eq!(child.age, "5");
        assert_eq!(child.gender, "female");
        assert_eq!(child.hair_color, "brown");
        assert_eq!(child.eye_color, "blue");
        assert_eq!(child.skin_tone, "tan");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let child = Child::parse("Raia,3,female,black,gray,brown,loves cats").unwrap();
        assert_eq!(child.skin_tone, "brown");
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(Child::parse("Mia, 5, female, brown, blue").is_none());
        assert!(Child::parse("").is_none());
    }

    #[test]
    fn test_describe() {
        let child = Child::parse("Mia, 5, female, brown, blue, tan").unwrap();
        assert_eq!(child.describe(), "Mia (5 years old, female, Hair: brown, Eyes: blue, Skin: tan)");
    }

    proptest! {
        #[test]
        fn prop_fewer_than_six_parts_rejected(parts in prop::collection::vec("[a-z ]{0,8}", 1..6)) {
            prop_assert!(Child::parse(&parts.join(",")).is_none());
        }

        #[test]
        fn prop_first_six_parts_kept_trimmed(parts in prop::collection::vec("[a-z ]{0,8}", 6..10)) {
            let child = Child::parse(&parts.join(",")).unwrap();
            let stored = [
                &child.name, &child.age, &child.gender,
                &child.hair_color, &child.eye_color, &child.skin_tone,
            ];
            for (value, part) in stored.iter().zip(parts.iter()) {
                prop_assert_eq!(value.as_str(), part.trim());
            }
        }
    }
}
