//! Suggestion engine: ranked suggestions plus history tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::context::TimeOfDay;
use super::scoring::suitability_score;
use crate::error::CoreError;
use crate::storage::Database;
use crate::task::Task;
use crate::template::TaskTemplate;

/// One row of suggestion history.
///
/// References its template by id only; the template may later be deleted,
/// leaving an orphaned history row, which is tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// Unique identifier
    pub id: String,
    /// Id of the suggested template
    pub template_id: String,
    /// Mood value at suggestion time (1-10)
    pub mood_value: u8,
    /// Time-of-day bucket at suggestion time
    pub time_of_day: TimeOfDay,
    /// When the suggestion was surfaced
    pub suggested_at: DateTime<Utc>,
    /// Whether the user accepted it
    pub accepted: bool,
    /// When acceptance was recorded
    pub responded_at: Option<DateTime<Utc>>,
}

/// A template together with its suitability score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSuggestion {
    pub template: TaskTemplate,
    pub score: f64,
}

/// Rank templates for a mood and time context.
///
/// Pure: filters by mood-range membership, scores, stable-sorts descending
/// (ties keep the encounter order of `templates`) and truncates. Exposed
/// separately from the engine so it can be exercised without a store.
pub fn rank(
    templates: Vec<TaskTemplate>,
    history: &[SuggestionRecord],
    mood_value: u8,
    time_of_day: TimeOfDay,
    max_suggestions: usize,
) -> Vec<ScoredSuggestion> {
    let mut scored: Vec<ScoredSuggestion> = templates
        .into_iter()
        .filter(|template| template.suits_mood(mood_value))
        .map(|template| {
            let score = suitability_score(&template, mood_value, time_of_day, history);
            ScoredSuggestion { template, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(max_suggestions);
    scored
}

/// Suggestion engine over the template catalog and suggestion history.
///
/// Constructed once and passed by reference; all operations are synchronous
/// and run on the caller's thread.
pub struct SuggestionEngine<'a> {
    db: &'a Database,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Ranked suggestions for the given mood and time of day.
    ///
    /// Store read failures yield an empty list rather than an error; the
    /// worst case is a missing suggestion cycle, not a crash.
    pub fn suggest_tasks(
        &self,
        mood_value: u8,
        time_of_day: TimeOfDay,
        max_suggestions: usize,
    ) -> Vec<ScoredSuggestion> {
        let templates = match self.db.list_templates_by_title() {
            Ok(templates) => templates,
            Err(e) => {
                eprintln!("Warning: failed to read template catalog: {e}");
                return Vec::new();
            }
        };
        let history = match self.db.suggestions_in_mood_band(mood_value, 1) {
            Ok(history) => history,
            Err(e) => {
                eprintln!("Warning: failed to read suggestion history: {e}");
                Vec::new()
            }
        };
        rank(templates, &history, mood_value, time_of_day, max_suggestions)
    }

    /// Persist one history row for a surfaced suggestion.
    ///
    /// Returns the stored record; callers must keep its id to record an
    /// acceptance for this exact suggestion later.
    pub fn record_suggestion(
        &self,
        template: &TaskTemplate,
        mood_value: u8,
        time_of_day: TimeOfDay,
    ) -> Result<SuggestionRecord, CoreError> {
        let record = SuggestionRecord {
            id: Uuid::new_v4().to_string(),
            template_id: template.id.clone(),
            mood_value,
            time_of_day,
            suggested_at: Utc::now(),
            accepted: false,
            responded_at: None,
        };
        self.db.insert_suggestion(&record)?;
        Ok(record)
    }

    /// Mark a previously recorded suggestion as accepted.
    ///
    /// Silently a no-op when the id is unknown: returns `Ok(None)` and
    /// changes nothing.
    pub fn record_acceptance(
        &self,
        suggestion_id: &str,
    ) -> Result<Option<SuggestionRecord>, CoreError> {
        let Some(mut record) = self.db.get_suggestion(suggestion_id)? else {
            return Ok(None);
        };
        record.accepted = true;
        record.responded_at = Some(Utc::now());
        self.db.update_suggestion(&record)?;
        Ok(Some(record))
    }

    /// Materialize a task from an accepted template.
    pub fn create_task(&self, template: &TaskTemplate) -> Task {
        Task::from_template(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TaskCategory;

    fn make_template(
        id: &str,
        title: &str,
        category: Option<TaskCategory>,
        difficulty: u8,
        mood_range: Option<&str>,
    ) -> TaskTemplate {
        TaskTemplate {
            id: id.to_string(),
            title: title.to_string(),
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

    #[test]
    fn rank_filters_by_mood_range() {
        let templates = vec![
            make_template("t1", "High spirits", Some(TaskCategory::Exercise), 4, Some("7-10")),
            make_template("t2", "Gentle", Some(TaskCategory::SelfCare), 1, Some("1-5")),
        ];
        let ranked = rank(templates, &[], 9, TimeOfDay::Morning, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].template.id, "t1");
    }

    #[test]
    fn rank_end_to_end_score() {
        let templates = vec![make_template(
            "t1",
            "Go for a Run",
            Some(TaskCategory::Exercise),
            4,
            Some("7-10"),
        )];
        let ranked = rank(templates, &[], 9, TimeOfDay::Morning, 5);
        let expected = 0.40 * (1.0 - 0.5 / 1.5) + 0.20 + 0.25 * 0.5 + 0.15;
        assert!((ranked[0].score - expected).abs() < 1e-9);
    }

    #[test]
    fn rank_truncates_to_max() {
        let templates: Vec<TaskTemplate> = (0..5)
            .map(|i| make_template(&format!("t{i}"), &format!("Template {i}"), None, 3, Some("1-10")))
            .collect();
        let ranked = rank(templates, &[], 5, TimeOfDay::Afternoon, 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn rank_is_deterministic_and_stable() {
        let templates: Vec<TaskTemplate> = (0..4)
            .map(|i| make_template(&format!("t{i}"), &format!("Template {i}"), None, 3, Some("1-10")))
            .collect();
        let first = rank(templates.clone(), &[], 6, TimeOfDay::Evening, 10);
        let second = rank(templates, &[], 6, TimeOfDay::Evening, 10);
        let first_ids: Vec<&str> = first.iter().map(|s| s.template.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|s| s.template.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
        // Identical scores keep encounter order.
        assert_eq!(first_ids, vec!["t0", "t1", "t2", "t3"]);
    }

    #[test]
    fn rank_keeps_unparsable_range_with_neutral_score() {
        let templates = vec![make_template("t1", "Odd", None, 3, Some("abc"))];
        for mood in [1u8, 5, 10] {
            let ranked = rank(templates.clone(), &[], mood, TimeOfDay::Night, 5);
            assert_eq!(ranked.len(), 1);
        }
    }

    #[test]
    fn rank_history_breaks_ties() {
        let templates = vec![
            make_template("t1", "A", None, 3, Some("1-10")),
            make_template("t2", "B", None, 3, Some("1-10")),
        ];
        let history = vec![SuggestionRecord {
            id: "s1".to_string(),
            template_id: "t2".to_string(),
            mood_value: 5,
            time_of_day: TimeOfDay::Morning,
            suggested_at: Utc::now(),
            accepted: true,
            responded_at: Some(Utc::now()),
        }];
        let ranked = rank(templates, &history, 5, TimeOfDay::Morning, 5);
        assert_eq!(ranked[0].template.id, "t2");
        assert!(ranked[0].score > ranked[1].score);
    }
}
