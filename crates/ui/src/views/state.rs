use dioxus::prelude::*;

/// User-visible failure categories; the wording matches the alert copy the
/// quiz shows for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    StartFailed,
    SubmitFailed,
    AdvanceFailed,
    ResetFailed,
    UndoFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::StartFailed => "Error starting game",
            ViewError::SubmitFailed => "Error submitting answer",
            ViewError::AdvanceFailed => "Error getting next character",
            ViewError::ResetFailed => "Error resetting progress",
            ViewError::UndoFailed => "Error undoing answer",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
