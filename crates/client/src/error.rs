//! Shared error types for the client crate.

use thiserror::Error;

use quiz_core::model::CharacterError;

/// Errors emitted by `QuizApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("server request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("server declined the request: {0}")]
    Rejected(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Character(#[from] CharacterError),
}

/// Errors emitted by `QuizLoopService::answer_current`, split by the stage
/// that failed so the UI can word its notification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("submitting the answer failed: {0}")]
    Submit(#[source] ApiError),

    #[error("fetching the next character failed: {0}")]
    Advance(#[source] ApiError),
}
