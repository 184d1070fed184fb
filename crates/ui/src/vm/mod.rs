mod progress_vm;
mod quiz_vm;
mod stats_vm;

pub use progress_vm::{map_progress, MissedItemVm, ProgressVm, NO_MISSES_MESSAGE};
pub use quiz_vm::{QuizIntent, QuizVm};
pub use stats_vm::{map_stats, RecentRowVm, StatsVm};
