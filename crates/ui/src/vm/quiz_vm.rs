use client::{
    AnswerError, AnswerOutcome, QuizLoopService, QuizPhase, QuizSession, StartOutcome,
};
use quiz_core::model::{ProgressSnapshot, StartOptions};

use crate::views::ViewError;

/// User intents the quiz view can dispatch while a character is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ToggleReveal,
    Answer(bool),
    Undo,
}

/// View-model over the quiz session: render state plus the async operations,
/// with the sequencing delegated to `QuizLoopService`.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
    reveal_open: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: QuizSession::new(),
            reveal_open: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn has_character(&self) -> bool {
        self.session.has_character()
    }

    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.session.answer_controls_enabled()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.session.last_answered().is_some() && !self.session.answer_in_flight()
    }

    #[must_use]
    pub fn reveal_open(&self) -> bool {
        self.reveal_open
    }

    #[must_use]
    pub fn prompt_text(&self) -> Option<&str> {
        self.session
            .current_character()
            .map(|character| character.prompt_text())
    }

    #[must_use]
    pub fn answer_text(&self) -> Option<&str> {
        self.session
            .current_character()
            .map(|character| character.answer_text())
    }

    #[must_use]
    pub fn char_number(&self) -> Option<u32> {
        self.session
            .current_character()
            .map(|character| character.char_number())
    }

    pub fn toggle_reveal(&mut self) {
        if self.session.has_character() {
            self.reveal_open = !self.reveal_open;
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::StartFailed` when the start request fails.
    pub async fn start(
        &mut self,
        quiz_loop: &QuizLoopService,
        options: StartOptions,
    ) -> Result<StartOutcome, ViewError> {
        let outcome = quiz_loop
            .start_game(&mut self.session, options)
            .await
            .map_err(|err| {
                log::error!("start request failed: {err}");
                ViewError::StartFailed
            })?;
        // Every freshly displayed character starts with the answer hidden.
        self.reveal_open = false;
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `ViewError::SubmitFailed` or `ViewError::AdvanceFailed`
    /// depending on which stage of the round-trip failed.
    pub async fn answer_current<F>(
        &mut self,
        quiz_loop: &QuizLoopService,
        is_correct: bool,
        on_progress: F,
    ) -> Result<AnswerOutcome, ViewError>
    where
        F: FnMut(ProgressSnapshot),
    {
        let outcome = quiz_loop
            .answer_current(&mut self.session, is_correct, on_progress)
            .await
            .map_err(|err| {
                log::error!("answer round-trip failed: {err}");
                match err {
                    AnswerError::Submit(_) => ViewError::SubmitFailed,
                    AnswerError::Advance(_) => ViewError::AdvanceFailed,
                    _ => ViewError::Unknown,
                }
            })?;
        if outcome != AnswerOutcome::Ignored {
            self.reveal_open = false;
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `ViewError::UndoFailed` when the undo request fails.
    pub async fn undo(&mut self, quiz_loop: &QuizLoopService) -> Result<bool, ViewError> {
        let undone = quiz_loop
            .undo_last_answer(&mut self.session)
            .await
            .map_err(|err| {
                log::error!("undo request failed: {err}");
                ViewError::UndoFailed
            })?;
        if undone {
            self.reveal_open = false;
        }
        Ok(undone)
    }

    /// # Errors
    ///
    /// Returns `ViewError::ResetFailed` when the reset request fails; the
    /// session is unchanged in that case.
    pub async fn reset(&mut self, quiz_loop: &QuizLoopService) -> Result<(), ViewError> {
        quiz_loop
            .reset_progress(&mut self.session)
            .await
            .map_err(|err| {
                log::error!("reset request failed: {err}");
                ViewError::ResetFailed
            })?;
        self.reveal_open = false;
        Ok(())
    }
}

impl Default for QuizVm {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use client::{ApiError, CharacterFetch, QuizApi, UserSettings};
    use quiz_core::model::{Direction, QuizCharacter, SessionStats};

    #[derive(Default)]
    struct ScriptedApi {
        start_results: Mutex<VecDeque<Result<CharacterFetch, ApiError>>>,
        next_results: Mutex<VecDeque<Result<CharacterFetch, ApiError>>>,
        submit_results: Mutex<VecDeque<Result<(), ApiError>>>,
    }

    fn boom() -> ApiError {
        ApiError::Rejected("scripted failure".into())
    }

    fn pop<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
        queue.lock().unwrap().pop_front().expect("scripted response")
    }

    #[async_trait]
    impl QuizApi for ScriptedApi {
        async fn start_game(&self, _options: StartOptions) -> Result<CharacterFetch, ApiError> {
            pop(&self.start_results)
        }

        async fn next_character(&self) -> Result<CharacterFetch, ApiError> {
            pop(&self.next_results)
        }

        async fn submit_answer(
            &self,
            _character: &str,
            _is_correct: bool,
        ) -> Result<(), ApiError> {
            pop(&self.submit_results)
        }

        async fn progress(&self) -> Result<ProgressSnapshot, ApiError> {
            Ok(ProgressSnapshot {
                shown_characters: 1,
                total_characters: 10,
                progress_percentage: 10.0,
                score_percentage: 100.0,
                incorrect: Vec::new(),
            })
        }

        async fn reset_progress(&self) -> Result<(), ApiError> {
            Ok(())
        }

        async fn undo_answer(&self, _character: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn user_settings(&self) -> Result<UserSettings, ApiError> {
            Err(boom())
        }

        async fn stats(&self) -> Result<SessionStats, ApiError> {
            Err(boom())
        }
    }

    fn water() -> QuizCharacter {
        QuizCharacter::new("水", "water", Direction::JapaneseToEnglish, 1).unwrap()
    }

    fn fire() -> QuizCharacter {
        QuizCharacter::new("火", "fire", Direction::JapaneseToEnglish, 2).unwrap()
    }

    fn service(api: &Arc<ScriptedApi>) -> QuizLoopService {
        QuizLoopService::new(Arc::clone(api) as Arc<dyn QuizApi>)
            .with_advance_delay(Duration::ZERO)
    }

    fn options() -> StartOptions {
        StartOptions::new(10, Direction::JapaneseToEnglish).unwrap()
    }

    #[tokio::test]
    async fn starting_shows_the_prompt_for_the_chosen_direction() {
        let api = Arc::new(ScriptedApi::default());
        api.start_results
            .lock()
            .unwrap()
            .push_back(Ok(CharacterFetch::Character(water())));
        let quiz_loop = service(&api);
        let mut vm = QuizVm::new();

        let outcome = vm.start(&quiz_loop, options()).await.unwrap();

        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(vm.phase(), QuizPhase::InQuiz);
        assert_eq!(vm.prompt_text(), Some("水"));
        assert_eq!(vm.answer_text(), Some("water"));
        assert_eq!(vm.char_number(), Some(1));
        assert!(!vm.reveal_open());
    }

    #[tokio::test]
    async fn starting_with_an_exhausted_list_finishes_without_a_character() {
        let api = Arc::new(ScriptedApi::default());
        api.start_results
            .lock()
            .unwrap()
            .push_back(Ok(CharacterFetch::NoMoreCharacters));
        let quiz_loop = service(&api);
        let mut vm = QuizVm::new();

        let outcome = vm.start(&quiz_loop, options()).await.unwrap();

        assert_eq!(outcome, StartOutcome::NoCharactersRemaining);
        assert_eq!(vm.phase(), QuizPhase::Finished);
        assert!(vm.prompt_text().is_none());
    }

    #[tokio::test]
    async fn the_reveal_closes_when_the_next_character_arrives() {
        let api = Arc::new(ScriptedApi::default());
        api.start_results
            .lock()
            .unwrap()
            .push_back(Ok(CharacterFetch::Character(water())));
        api.submit_results.lock().unwrap().push_back(Ok(()));
        api.next_results
            .lock()
            .unwrap()
            .push_back(Ok(CharacterFetch::Character(fire())));
        let quiz_loop = service(&api);
        let mut vm = QuizVm::new();
        vm.start(&quiz_loop, options()).await.unwrap();

        vm.toggle_reveal();
        assert!(vm.reveal_open());

        let outcome = vm
            .answer_current(&quiz_loop, true, |_| {})
            .await
            .unwrap();

        assert_eq!(outcome, AnswerOutcome::Advanced);
        assert!(!vm.reveal_open());
        assert_eq!(vm.prompt_text(), Some("火"));
    }

    #[tokio::test]
    async fn a_failed_submission_keeps_the_character_and_the_reveal() {
        let api = Arc::new(ScriptedApi::default());
        api.start_results
            .lock()
            .unwrap()
            .push_back(Ok(CharacterFetch::Character(water())));
        api.submit_results.lock().unwrap().push_back(Err(boom()));
        let quiz_loop = service(&api);
        let mut vm = QuizVm::new();
        vm.start(&quiz_loop, options()).await.unwrap();
        vm.toggle_reveal();

        let err = vm
            .answer_current(&quiz_loop, true, |_| {})
            .await
            .unwrap_err();

        assert_eq!(err, ViewError::SubmitFailed);
        assert_eq!(vm.prompt_text(), Some("水"));
        assert!(vm.reveal_open());
        assert!(vm.controls_enabled());
    }

    #[tokio::test]
    async fn answering_without_a_character_is_ignored() {
        let api = Arc::new(ScriptedApi::default());
        let quiz_loop = service(&api);
        let mut vm = QuizVm::new();

        let outcome = vm
            .answer_current(&quiz_loop, true, |_| {})
            .await
            .unwrap();

        assert_eq!(outcome, AnswerOutcome::Ignored);
        assert_eq!(vm.phase(), QuizPhase::Setup);
    }

    #[tokio::test]
    async fn reset_returns_the_vm_to_setup() {
        let api = Arc::new(ScriptedApi::default());
        api.start_results
            .lock()
            .unwrap()
            .push_back(Ok(CharacterFetch::Character(water())));
        let quiz_loop = service(&api);
        let mut vm = QuizVm::new();
        vm.start(&quiz_loop, options()).await.unwrap();

        vm.reset(&quiz_loop).await.unwrap();

        assert_eq!(vm.phase(), QuizPhase::Setup);
        assert!(!vm.has_character());
    }
}
