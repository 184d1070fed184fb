#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod http;
pub mod session;
pub mod session_loop;

pub use api::{CharacterFetch, QuizApi, UserSettings};
pub use error::{AnswerError, ApiError};
pub use http::{HttpQuizApi, ServerConfig};
pub use session::{QuizPhase, QuizSession};
pub use session_loop::{AnswerOutcome, QuizLoopService, StartOutcome, DEFAULT_ADVANCE_DELAY};
