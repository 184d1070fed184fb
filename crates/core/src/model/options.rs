use thiserror::Error;

use crate::model::Direction;

/// Server-side default for the size of the study list.
pub const DEFAULT_NUM_CHARS: u32 = 2200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("a quiz needs at least one character")]
    ZeroCharacters,
}

/// Validated parameters for starting a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    num_chars: u32,
    direction: Direction,
}

impl StartOptions {
    /// # Errors
    ///
    /// Returns `OptionsError::ZeroCharacters` when `num_chars` is zero.
    pub fn new(num_chars: u32, direction: Direction) -> Result<Self, OptionsError> {
        if num_chars == 0 {
            return Err(OptionsError::ZeroCharacters);
        }
        Ok(Self {
            num_chars,
            direction,
        })
    }

    #[must_use]
    pub fn num_chars(&self) -> u32 {
        self.num_chars
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            num_chars: DEFAULT_NUM_CHARS,
            direction: Direction::default(),
        }
    }
}
