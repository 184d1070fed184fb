use quiz_core::model::ProgressSnapshot;

/// Shown in place of the incorrect-answers list while it is empty.
pub const NO_MISSES_MESSAGE: &str = "No incorrect answers yet";

/// Render-ready progress labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub bar_width: String,
    pub progress_label: String,
    pub score_label: String,
    pub missed: Vec<MissedItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissedItemVm {
    pub character: String,
    pub meaning: String,
}

#[must_use]
pub fn map_progress(snapshot: &ProgressSnapshot) -> ProgressVm {
    ProgressVm {
        bar_width: format!("{}%", snapshot.progress_percentage),
        progress_label: format!(
            "{} / {} ({}%)",
            snapshot.shown_characters, snapshot.total_characters, snapshot.progress_percentage
        ),
        score_label: format!("{}%", snapshot.score_percentage),
        missed: snapshot
            .incorrect
            .iter()
            .map(|item| MissedItemVm {
                character: item.character.clone(),
                meaning: item.meaning.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::MissedCharacter;

    fn snapshot() -> ProgressSnapshot {
        ProgressSnapshot {
            shown_characters: 3,
            total_characters: 10,
            progress_percentage: 30.0,
            score_percentage: 66.67,
            incorrect: vec![MissedCharacter {
                character: "火".into(),
                meaning: "fire".into(),
            }],
        }
    }

    #[test]
    fn labels_match_the_progress_panel_format() {
        let vm = map_progress(&snapshot());
        assert_eq!(vm.progress_label, "3 / 10 (30%)");
        assert_eq!(vm.score_label, "66.67%");
        assert_eq!(vm.bar_width, "30%");
    }

    #[test]
    fn missed_characters_carry_over() {
        let vm = map_progress(&snapshot());
        assert_eq!(vm.missed.len(), 1);
        assert_eq!(vm.missed[0].character, "火");
        assert_eq!(vm.missed[0].meaning, "fire");
    }

    #[test]
    fn fractional_percentages_keep_their_digits() {
        let mut source = snapshot();
        source.progress_percentage = 42.86;
        let vm = map_progress(&source);
        assert_eq!(vm.bar_width, "42.86%");
    }
}
