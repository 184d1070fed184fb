use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of a character is shown as the prompt.
///
/// The wire form is the exact label the server stores and echoes back,
/// arrow included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "Japanese → English")]
    JapaneseToEnglish,
    #[serde(rename = "English → Japanese")]
    EnglishToJapanese,
}

impl Direction {
    /// Returns the server-side label for this direction.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Direction::JapaneseToEnglish => "Japanese → English",
            Direction::EnglishToJapanese => "English → Japanese",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for parsing a direction label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    raw: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quiz direction: {}", self.raw)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Japanese → English" => Ok(Direction::JapaneseToEnglish),
            "English → Japanese" => Ok(Direction::EnglishToJapanese),
            other => Err(ParseDirectionError {
                raw: other.to_string(),
            }),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
