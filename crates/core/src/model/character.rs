use thiserror::Error;

use crate::model::Direction;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CharacterError {
    #[error("character text is empty")]
    EmptyCharacter,

    #[error("meaning text is empty")]
    EmptyMeaning,

    #[error("character number must be at least 1")]
    ZeroNumber,
}

/// The character currently offered as a quiz prompt.
///
/// Created from a successful server fetch and replaced wholesale by the next
/// fetch; the server remains the source of truth for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCharacter {
    character: String,
    meaning: String,
    direction: Direction,
    char_number: u32,
}

impl QuizCharacter {
    /// Build a displayed character from its parts.
    ///
    /// # Errors
    ///
    /// Returns `CharacterError` when either text side is blank or the ordinal
    /// is zero.
    pub fn new(
        character: impl Into<String>,
        meaning: impl Into<String>,
        direction: Direction,
        char_number: u32,
    ) -> Result<Self, CharacterError> {
        let character = character.into();
        let meaning = meaning.into();

        if character.trim().is_empty() {
            return Err(CharacterError::EmptyCharacter);
        }
        if meaning.trim().is_empty() {
            return Err(CharacterError::EmptyMeaning);
        }
        if char_number == 0 {
            return Err(CharacterError::ZeroNumber);
        }

        Ok(Self {
            character,
            meaning,
            direction,
            char_number,
        })
    }

    #[must_use]
    pub fn character(&self) -> &str {
        &self.character
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// 1-based ordinal of the character in the study list, for display.
    #[must_use]
    pub fn char_number(&self) -> u32 {
        self.char_number
    }

    /// The side shown as the prompt for this character's direction.
    #[must_use]
    pub fn prompt_text(&self) -> &str {
        match self.direction {
            Direction::JapaneseToEnglish => &self.character,
            Direction::EnglishToJapanese => &self.meaning,
        }
    }

    /// The side kept behind the answer reveal.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        match self.direction {
            Direction::JapaneseToEnglish => &self.meaning,
            Direction::EnglishToJapanese => &self.character,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
