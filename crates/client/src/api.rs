use async_trait::async_trait;

use quiz_core::model::{ProgressSnapshot, QuizCharacter, SessionStats, StartOptions};

use crate::error::ApiError;

/// Outcome of a character fetch: either the next prompt, or the signal that
/// the study list is exhausted. Exhaustion is a valid terminal state, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterFetch {
    Character(QuizCharacter),
    NoMoreCharacters,
}

/// Saved per-user preferences, used to prefill the setup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub username: String,
    pub saved_num_chars: u32,
}

/// Contract for the quiz backend.
///
/// The server owns persistence, question selection, and scoring; the client
/// only ever talks to it through these calls.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Begin a quiz over the first `num_chars` characters of the study list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures, non-success statuses, or an
    /// invalid character payload.
    async fn start_game(&self, options: StartOptions) -> Result<CharacterFetch, ApiError>;

    /// Fetch the next character for the running quiz.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures, non-success statuses, or an
    /// invalid character payload.
    async fn next_character(&self) -> Result<CharacterFetch, ApiError>;

    /// Record a right/wrong answer for the named character.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn submit_answer(&self, character: &str, is_correct: bool) -> Result<(), ApiError>;

    /// Fetch the aggregate progress snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn progress(&self) -> Result<ProgressSnapshot, ApiError>;

    /// Clear all recorded answers for the current direction.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn reset_progress(&self) -> Result<(), ApiError>;

    /// Remove the recorded answer for the named character.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures, non-success statuses, or
    /// `ApiError::Rejected` when the server does not know the character.
    async fn undo_answer(&self, character: &str) -> Result<(), ApiError>;

    /// Fetch the saved per-user settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn user_settings(&self) -> Result<UserSettings, ApiError>;

    /// Fetch lifetime answer statistics.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    async fn stats(&self) -> Result<SessionStats, ApiError>;
}
