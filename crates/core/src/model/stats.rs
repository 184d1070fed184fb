use chrono::NaiveDate;

/// Lifetime answer statistics for the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub total_answered: u32,
    pub total_correct: u32,
    pub overall_percentage: f64,
    pub avg_correct_time_ms: u32,
    pub avg_incorrect_time_ms: u32,
    pub fastest_time_ms: u32,
    pub slowest_time_ms: u32,
    pub jp_to_en: DirectionStats,
    pub en_to_jp: DirectionStats,
    pub recent: Vec<DailyProgress>,
}

/// Totals for a single quiz direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionStats {
    pub total: u32,
    pub correct: u32,
    pub percentage: f64,
}

/// Per-day answer counts over the recent window.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub total: u32,
    pub correct: u32,
}
