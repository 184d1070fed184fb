use quiz_core::model::{DirectionStats, SessionStats};

/// Render-ready labels for the stats page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub answered_label: String,
    pub accuracy_label: String,
    pub timing_label: String,
    pub range_label: String,
    pub jp_to_en_label: String,
    pub en_to_jp_label: String,
    pub recent: Vec<RecentRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentRowVm {
    pub date_label: String,
    pub counts_label: String,
}

#[must_use]
pub fn map_stats(stats: &SessionStats) -> StatsVm {
    StatsVm {
        answered_label: format!(
            "{} answered, {} correct",
            stats.total_answered, stats.total_correct
        ),
        accuracy_label: format!("{}% overall", stats.overall_percentage),
        timing_label: format!(
            "Avg correct {} / avg incorrect {}",
            format_ms(stats.avg_correct_time_ms),
            format_ms(stats.avg_incorrect_time_ms)
        ),
        range_label: format!(
            "Fastest {} / slowest {}",
            format_ms(stats.fastest_time_ms),
            format_ms(stats.slowest_time_ms)
        ),
        jp_to_en_label: direction_label("Japanese → English", &stats.jp_to_en),
        en_to_jp_label: direction_label("English → Japanese", &stats.en_to_jp),
        recent: stats
            .recent
            .iter()
            .map(|row| RecentRowVm {
                date_label: row.date.format("%Y-%m-%d").to_string(),
                counts_label: format!("{} answered, {} correct", row.total, row.correct),
            })
            .collect(),
    }
}

fn direction_label(name: &str, stats: &DirectionStats) -> String {
    format!(
        "{name}: {}/{} ({}%)",
        stats.correct, stats.total, stats.percentage
    )
}

fn format_ms(ms: u32) -> String {
    if ms >= 1000 {
        format!("{:.1}s", f64::from(ms) / 1000.0)
    } else {
        format!("{ms} ms")
    }
}
