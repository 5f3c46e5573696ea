use crate::models::group::QuestionGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty bucket of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// What the numbering pass needs from a block's content: its difficulty.
/// Everything else (passage text, audio, titles) is opaque to it.
pub trait BlockContent {
    fn difficulty(&self) -> Difficulty;
}

/// A content block: one unit of exam material plus its ordered question
/// groups. Reading tests instantiate this with [`Passage`], listening
/// tests with [`AudioSegment`]; the two are identical as far as numbering
/// is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<C> {
    pub content: C,
    #[serde(default)]
    pub groups: Vec<QuestionGroup>,
}

impl<C> Block<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            groups: Vec::new(),
        }
    }

    pub fn with_groups(content: C, groups: Vec<QuestionGroup>) -> Self {
        Self { content, groups }
    }
}

/// A reading passage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub body: String,
}

impl BlockContent for Passage {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// A listening audio segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSegment {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl BlockContent for AudioSegment {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// A reading-test block.
pub type ReadingBlock = Block<Passage>;
/// A listening-test block.
pub type ListeningBlock = Block<AudioSegment>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }

    #[test]
    fn test_block_with_absent_groups_decodes_to_empty() {
        let json = r#"{"content": {"title": "Coral reefs", "difficulty": "easy", "body": "..."}}"#;
        let block: ReadingBlock = serde_json::from_str(json).unwrap();
        assert!(block.groups.is_empty());
        assert_eq!(block.content.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_missing_difficulty_defaults_to_medium() {
        let json = r#"{"content": {"title": "Untitled", "body": ""}, "groups": []}"#;
        let block: ReadingBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.content.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_listening_block_decodes_media_reference() {
        let json = r#"{
            "content": {
                "title": "Campus tour",
                "difficulty": "medium",
                "transcript": "Welcome to the campus...",
                "audioUrl": "https://cdn.example.com/audio/campus-tour.mp3"
            },
            "groups": []
        }"#;

        let block: ListeningBlock = serde_json::from_str(json).unwrap();
        assert_eq!(
            block.content.audio_url.as_deref(),
            Some("https://cdn.example.com/audio/campus-tour.mp3")
        );
    }
}
