/// Aggregated view of quiz progress, useful for UI.
///
/// Re-fetched from the server on demand; never cached beyond the current
/// render.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub shown_characters: u32,
    pub total_characters: u32,
    pub progress_percentage: f64,
    pub score_percentage: f64,
    pub incorrect: Vec<MissedCharacter>,
}

/// A character previously answered incorrectly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedCharacter {
    pub character: String,
    pub meaning: String,
}
