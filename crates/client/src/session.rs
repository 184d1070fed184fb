use quiz_core::model::QuizCharacter;

/// UI-facing phase of a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Setup,
    InQuiz,
    Finished,
}

/// Client-side state for one quiz run.
///
/// Owns the only state the client keeps between calls: the character
/// currently on screen, the last answered character (for undo), and the
/// in-flight flag that makes the answer controls a deterministic function
/// of state instead of ad hoc toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    phase: QuizPhase,
    current: Option<QuizCharacter>,
    last_answered: Option<QuizCharacter>,
    answer_in_flight: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Setup,
            current: None,
            last_answered: None,
            answer_in_flight: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_character(&self) -> Option<&QuizCharacter> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_character(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn last_answered(&self) -> Option<&QuizCharacter> {
        self.last_answered.as_ref()
    }

    #[must_use]
    pub fn answer_in_flight(&self) -> bool {
        self.answer_in_flight
    }

    /// Whether the correct/incorrect controls should accept input.
    #[must_use]
    pub fn answer_controls_enabled(&self) -> bool {
        self.phase == QuizPhase::InQuiz && self.current.is_some() && !self.answer_in_flight
    }

    /// Display a freshly fetched character, replacing the previous one.
    pub(crate) fn show_character(&mut self, character: QuizCharacter) {
        self.phase = QuizPhase::InQuiz;
        self.current = Some(character);
    }

    /// No characters remain; the displayed character is cleared so stale
    /// answers can no longer reference it.
    pub(crate) fn finish(&mut self) {
        self.phase = QuizPhase::Finished;
        self.current = None;
    }

    /// Remember the character a submission was just recorded for.
    pub(crate) fn record_answered(&mut self, character: QuizCharacter) {
        self.last_answered = Some(character);
    }

    /// Bring the last answered character back on screen.
    pub(crate) fn restore_answered(&mut self) -> bool {
        match self.last_answered.take() {
            Some(character) => {
                self.show_character(character);
                true
            }
            None => false,
        }
    }

    /// Lock the answer controls for a round-trip. Refused when another
    /// round-trip is already in flight or nothing is displayed.
    pub(crate) fn begin_answer(&mut self) -> bool {
        if self.answer_in_flight || self.current.is_none() {
            return false;
        }
        self.answer_in_flight = true;
        true
    }

    pub(crate) fn end_answer(&mut self) {
        self.answer_in_flight = false;
    }

    /// Return to the setup phase, dropping all held state.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
