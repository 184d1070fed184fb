use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{ProgressSnapshot, QuizCharacter, SessionStats, StartOptions};

use crate::api::{CharacterFetch, QuizApi, UserSettings};
use crate::error::{AnswerError, ApiError};
use crate::session::QuizSession;

/// Fixed pause between a recorded answer and the next prompt, so the
/// refreshed progress is visible while the answered character is still on
/// screen.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(500);

/// Result of starting a quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    NoCharactersRemaining,
}

/// Result of answering the displayed character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Nothing was displayed, or a round-trip was already in flight; no
    /// network call was made and nothing changed.
    Ignored,
    Advanced,
    Finished,
}

/// Sequences quiz operations against the server API.
///
/// All state lives in the `QuizSession` passed to each call; the service
/// itself is cheap to clone and share.
#[derive(Clone)]
pub struct QuizLoopService {
    api: Arc<dyn QuizApi>,
    advance_delay: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self {
            api,
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }

    /// Override the pause before fetching the next character. Tests use
    /// `Duration::ZERO`.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Start a quiz. A character response enters the quiz with it displayed;
    /// the exhaustion signal finishes the session without ever displaying
    /// one. On failure the session stays in setup.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures, non-success statuses, or an
    /// invalid payload.
    pub async fn start_game(
        &self,
        session: &mut QuizSession,
        options: StartOptions,
    ) -> Result<StartOutcome, ApiError> {
        match self.api.start_game(options).await? {
            CharacterFetch::Character(character) => {
                session.show_character(character);
                Ok(StartOutcome::Started)
            }
            CharacterFetch::NoMoreCharacters => {
                session.finish();
                Ok(StartOutcome::NoCharactersRemaining)
            }
        }
    }

    /// Record an answer for the displayed character, then advance.
    ///
    /// Ignored when nothing is displayed or another answer is in flight, so
    /// at most one round-trip runs per session. On success the progress
    /// snapshot is handed to `on_progress` before the advance delay, while
    /// the answered character is still on screen; a progress failure is
    /// logged and skipped rather than aborting the flow. The answer controls
    /// are unlocked exactly once on every exit path.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Submit` when recording the answer fails (the
    /// displayed character is unchanged) and `AnswerError::Advance` when the
    /// follow-up fetch fails (the answer is already recorded).
    pub async fn answer_current<F>(
        &self,
        session: &mut QuizSession,
        is_correct: bool,
        on_progress: F,
    ) -> Result<AnswerOutcome, AnswerError>
    where
        F: FnMut(ProgressSnapshot),
    {
        let Some(character) = session.current_character().cloned() else {
            return Ok(AnswerOutcome::Ignored);
        };
        if !session.begin_answer() {
            return Ok(AnswerOutcome::Ignored);
        }

        let result = self
            .drive_answer(session, character, is_correct, on_progress)
            .await;
        session.end_answer();
        result
    }

    async fn drive_answer<F>(
        &self,
        session: &mut QuizSession,
        character: QuizCharacter,
        is_correct: bool,
        mut on_progress: F,
    ) -> Result<AnswerOutcome, AnswerError>
    where
        F: FnMut(ProgressSnapshot),
    {
        self.api
            .submit_answer(character.character(), is_correct)
            .await
            .map_err(AnswerError::Submit)?;
        session.record_answered(character);

        // A stale progress panel is preferable to aborting the flow here.
        match self.api.progress().await {
            Ok(snapshot) => on_progress(snapshot),
            Err(err) => log::warn!("progress refresh after answer failed: {err}"),
        }

        if !self.advance_delay.is_zero() {
            tokio::time::sleep(self.advance_delay).await;
        }

        match self
            .api
            .next_character()
            .await
            .map_err(AnswerError::Advance)?
        {
            CharacterFetch::Character(next) => {
                session.show_character(next);
                Ok(AnswerOutcome::Advanced)
            }
            CharacterFetch::NoMoreCharacters => {
                session.finish();
                Ok(AnswerOutcome::Finished)
            }
        }
    }

    /// Passive refresh of the aggregate progress snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ApiError`; callers treat a failure as a stale display, not a
    /// user-facing fault.
    pub async fn refresh_progress(&self) -> Result<ProgressSnapshot, ApiError> {
        self.api.progress().await
    }

    /// Clear all recorded answers and return the session to setup.
    /// Confirmation is the caller's responsibility; on failure the session
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    pub async fn reset_progress(&self, session: &mut QuizSession) -> Result<(), ApiError> {
        self.api.reset_progress().await?;
        session.reset();
        Ok(())
    }

    /// Take back the last recorded answer and put its character back on
    /// screen, returning `false` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the server refuses or the call fails; the
    /// session is left untouched in that case.
    pub async fn undo_last_answer(&self, session: &mut QuizSession) -> Result<bool, ApiError> {
        if session.answer_in_flight() {
            return Ok(false);
        }
        let Some(last) = session.last_answered().cloned() else {
            return Ok(false);
        };

        self.api.undo_answer(last.character()).await?;
        Ok(session.restore_answered())
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    pub async fn user_settings(&self) -> Result<UserSettings, ApiError> {
        self.api.user_settings().await
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport failures or non-success statuses.
    pub async fn stats(&self) -> Result<SessionStats, ApiError> {
        self.api.stats().await
    }
}
