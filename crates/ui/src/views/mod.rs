mod quiz;
mod state;
mod stats;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use state::{view_state_from_resource, ViewError, ViewState};
pub use stats::StatsView;
