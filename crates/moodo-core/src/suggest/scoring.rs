//! Suitability scoring for task templates.
//!
//! Each candidate gets a weighted sum of four sub-scores, each in [0, 1]:
//! mood compatibility (0.40), time-of-day fit (0.20), user-history fit
//! (0.25) and energy fit (0.15). All functions here are pure; the engine
//! fetches catalog and history once per cycle and passes slices in.

use super::context::{EnergyTier, TimeOfDay};
use super::engine::SuggestionRecord;
use crate::template::{TaskCategory, TaskTemplate};

pub const MOOD_WEIGHT: f64 = 0.40;
pub const TIME_OF_DAY_WEIGHT: f64 = 0.20;
pub const HISTORY_WEIGHT: f64 = 0.25;
pub const ENERGY_WEIGHT: f64 = 0.15;

/// Mood compatibility in [0, 1].
///
/// 1.0 at the center of the matching sub-range, falling off linearly to
/// 0.0 at its edges. A template without a parsable mood range scores the
/// neutral 0.5; a parsed range that doesn't contain the mood (can't happen
/// after filtering) scores 0.0. Single-value sub-ranges have no width, so
/// a match is a perfect 1.0.
pub fn mood_compatibility_score(template: &TaskTemplate, mood_value: u8) -> f64 {
    let Some(range) = template.parsed_mood_range() else {
        return 0.5;
    };
    match range.matching(mood_value) {
        Some(sub) => {
            let half_width = sub.half_width();
            if half_width == 0.0 {
                1.0
            } else {
                let distance = (f64::from(mood_value) - sub.center()).abs();
                1.0 - distance / half_width
            }
        }
        None => 0.0,
    }
}

/// Time-of-day fit in [0, 1] from a fixed (category, bucket) table.
///
/// Unlisted pairs and templates without a category score 0.7.
pub fn time_of_day_score(template: &TaskTemplate, time_of_day: TimeOfDay) -> f64 {
    let Some(category) = template.category else {
        return 0.7;
    };
    match (category, time_of_day) {
        (TaskCategory::Exercise, TimeOfDay::Morning)
        | (TaskCategory::Cleaning, TimeOfDay::Morning) => 1.0,
        (TaskCategory::Creative, TimeOfDay::Morning)
        | (TaskCategory::Creative, TimeOfDay::Afternoon) => 0.9,
        (TaskCategory::Admin, TimeOfDay::Afternoon) => 1.0,
        (TaskCategory::SelfCare, TimeOfDay::Evening) => 1.0,
        (TaskCategory::Social, TimeOfDay::Evening) => 0.9,
        _ => 0.7,
    }
}

/// User-history fit in [0, 1].
///
/// Acceptance ratio of past suggestions for this template whose recorded
/// mood is within ±1 of the current mood. No history in that band means
/// the neutral prior 0.5.
pub fn history_score(template_id: &str, mood_value: u8, history: &[SuggestionRecord]) -> f64 {
    let band: Vec<&SuggestionRecord> = history
        .iter()
        .filter(|record| {
            record.template_id == template_id
                && (i16::from(record.mood_value) - i16::from(mood_value)).abs() <= 1
        })
        .collect();
    if band.is_empty() {
        return 0.5;
    }
    let accepted = band.iter().filter(|record| record.accepted).count();
    accepted as f64 / band.len() as f64
}

/// Energy fit in [0, 1] from a fixed tier/difficulty table.
pub fn energy_score(template: &TaskTemplate, mood_value: u8) -> f64 {
    let tier = EnergyTier::from_mood(mood_value);
    match (tier, template.difficulty) {
        (EnergyTier::Low, 1..=2) => 1.0,
        (EnergyTier::Medium, 2..=4) => 1.0,
        (EnergyTier::High, 3..=5) => 1.0,
        (EnergyTier::Low, 3..=5) => 0.3,
        (EnergyTier::High, 1..=2) => 0.6,
        _ => 0.5,
    }
}

/// Total weighted suitability score.
pub fn suitability_score(
    template: &TaskTemplate,
    mood_value: u8,
    time_of_day: TimeOfDay,
    history: &[SuggestionRecord],
) -> f64 {
    mood_compatibility_score(template, mood_value) * MOOD_WEIGHT
        + time_of_day_score(template, time_of_day) * TIME_OF_DAY_WEIGHT
        + history_score(&template.id, mood_value, history) * HISTORY_WEIGHT
        + energy_score(template, mood_value) * ENERGY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_template(
        category: Option<TaskCategory>,
        difficulty: u8,
        mood_range: Option<&str>,
    ) -> TaskTemplate {
        TaskTemplate {
            id: "tpl-1".to_string(),
            title: "Test Template".to_string(),
            description: String::new(),
            category,
            difficulty,
            estimated_minutes: 30,
            mood_range: mood_range.map(|s| s.to_string()),
            default_labels: Vec::new(),
            built_in: false,
            created_at: Utc::now(),
        }
    }

    fn make_record(template_id: &str, mood_value: u8, accepted: bool) -> SuggestionRecord {
        SuggestionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            template_id: template_id.to_string(),
            mood_value,
            time_of_day: TimeOfDay::Morning,
            suggested_at: Utc::now(),
            accepted,
            responded_at: None,
        }
    }

    #[test]
    fn mood_score_peaks_at_center() {
        let template = make_template(None, 3, Some("1-10"));
        // Center of 1-10 is 5.5; 5 and 6 are both nearest integers.
        let at_5 = mood_compatibility_score(&template, 5);
        let at_6 = mood_compatibility_score(&template, 6);
        assert!((at_5 - at_6).abs() < 1e-9);
        let mut previous = at_5;
        for mood in (1..=4).rev() {
            let score = mood_compatibility_score(&template, mood);
            assert!(score < previous, "score should decrease toward mood {mood}");
            previous = score;
        }
        let mut previous = at_6;
        for mood in 7..=10 {
            let score = mood_compatibility_score(&template, mood);
            assert!(score < previous, "score should decrease toward mood {mood}");
            previous = score;
        }
    }

    #[test]
    fn mood_score_exact_values() {
        let template = make_template(None, 3, Some("7-10"));
        // center 8.5, half-width 1.5
        let score = mood_compatibility_score(&template, 9);
        assert!((score - (1.0 - 0.5 / 1.5)).abs() < 1e-9);
    }

    #[test]
    fn mood_score_neutral_for_unparsable() {
        let template = make_template(None, 3, Some("abc"));
        for mood in 1..=10 {
            assert_eq!(mood_compatibility_score(&template, mood), 0.5);
        }
        let template = make_template(None, 3, None);
        assert_eq!(mood_compatibility_score(&template, 5), 0.5);
    }

    #[test]
    fn mood_score_single_value_range() {
        let template = make_template(None, 3, Some("5"));
        assert_eq!(mood_compatibility_score(&template, 5), 1.0);
    }

    #[test]
    fn time_score_table() {
        let exercise = make_template(Some(TaskCategory::Exercise), 3, None);
        assert_eq!(time_of_day_score(&exercise, TimeOfDay::Morning), 1.0);
        assert_eq!(time_of_day_score(&exercise, TimeOfDay::Evening), 0.7);

        let creative = make_template(Some(TaskCategory::Creative), 3, None);
        assert_eq!(time_of_day_score(&creative, TimeOfDay::Morning), 0.9);
        assert_eq!(time_of_day_score(&creative, TimeOfDay::Afternoon), 0.9);
        assert_eq!(time_of_day_score(&creative, TimeOfDay::Night), 0.7);

        let admin = make_template(Some(TaskCategory::Admin), 3, None);
        assert_eq!(time_of_day_score(&admin, TimeOfDay::Afternoon), 1.0);

        let selfcare = make_template(Some(TaskCategory::SelfCare), 1, None);
        assert_eq!(time_of_day_score(&selfcare, TimeOfDay::Evening), 1.0);

        let social = make_template(Some(TaskCategory::Social), 3, None);
        assert_eq!(time_of_day_score(&social, TimeOfDay::Evening), 0.9);

        let no_category = make_template(None, 3, None);
        assert_eq!(time_of_day_score(&no_category, TimeOfDay::Morning), 0.7);
    }

    #[test]
    fn history_score_neutral_without_records() {
        assert_eq!(history_score("tpl-1", 5, &[]), 0.5);
        // Records outside the ±1 band don't count.
        let history = vec![make_record("tpl-1", 9, true)];
        assert_eq!(history_score("tpl-1", 5, &history), 0.5);
        // Records for other templates don't count either.
        let history = vec![make_record("tpl-2", 5, true)];
        assert_eq!(history_score("tpl-1", 5, &history), 0.5);
    }

    #[test]
    fn history_score_acceptance_ratio() {
        let history = vec![
            make_record("tpl-1", 5, true),
            make_record("tpl-1", 6, false),
            make_record("tpl-1", 4, true),
            make_record("tpl-1", 5, false),
        ];
        assert_eq!(history_score("tpl-1", 5, &history), 0.5);

        let history = vec![
            make_record("tpl-1", 5, true),
            make_record("tpl-1", 6, true),
            make_record("tpl-1", 4, false),
        ];
        let score = history_score("tpl-1", 5, &history);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn energy_score_table() {
        let easy = make_template(None, 1, None);
        let medium = make_template(None, 3, None);
        let hard = make_template(None, 5, None);

        // Low energy favors easy work.
        assert_eq!(energy_score(&easy, 2), 1.0);
        assert_eq!(energy_score(&medium, 2), 0.3);
        assert_eq!(energy_score(&hard, 2), 0.3);

        // Medium energy suits mid difficulties.
        assert_eq!(energy_score(&medium, 5), 1.0);
        assert_eq!(energy_score(&easy, 5), 0.5);
        assert_eq!(energy_score(&hard, 5), 0.5);

        // High energy favors demanding work, tolerates easy.
        assert_eq!(energy_score(&hard, 9), 1.0);
        assert_eq!(energy_score(&easy, 9), 0.6);
    }

    #[test]
    fn total_score_matches_worked_example() {
        // Exercise, difficulty 4, range 7-10, mood 9, morning, no history:
        // 0.40 * (1 - 0.5/1.5) + 0.20 * 1.0 + 0.25 * 0.5 + 0.15 * 1.0
        let template = make_template(Some(TaskCategory::Exercise), 4, Some("7-10"));
        let score = suitability_score(&template, 9, TimeOfDay::Morning, &[]);
        let expected = 0.40 * (1.0 - 0.5 / 1.5) + 0.20 * 1.0 + 0.25 * 0.5 + 0.15 * 1.0;
        assert!((score - expected).abs() < 1e-9);
        assert!((score - 0.7417).abs() < 1e-3);
    }
}
