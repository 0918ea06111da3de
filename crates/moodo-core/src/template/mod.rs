//! Task templates and the template catalog.
//!
//! A template describes a reusable piece of work (title, category,
//! difficulty, duration, default labels) together with the mood range it
//! suits. Built-in templates are seeded once and cannot be edited or
//! deleted; user templates go through [`catalog::TemplateCatalog`].

pub mod catalog;
pub mod mood_range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use catalog::{join_labels, split_labels, TemplateCatalog, TemplateUpdate};
pub use mood_range::{MoodRange, SubRange};

/// Category of a task template.
///
/// Categories feed the time-of-day fit table in the suggestion scorer.
/// Free text is normalized on parse ("Self Care", "self-care" and
/// "selfcare" are the same category); text that matches no variant maps
/// to no category at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Cleaning,
    Exercise,
    Creative,
    Admin,
    SelfCare,
    Social,
    Learning,
    Work,
    Household,
}

impl TaskCategory {
    /// All known categories, for CLI listings.
    pub const ALL: [TaskCategory; 9] = [
        TaskCategory::Cleaning,
        TaskCategory::Exercise,
        TaskCategory::Creative,
        TaskCategory::Admin,
        TaskCategory::SelfCare,
        TaskCategory::Social,
        TaskCategory::Learning,
        TaskCategory::Work,
        TaskCategory::Household,
    ];

    /// Parse a category from free text.
    ///
    /// Case, spaces and hyphens are ignored. "Administrative" is accepted
    /// as an alias for Admin. Unknown text yields `None`.
    pub fn parse(text: &str) -> Option<TaskCategory> {
        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "cleaning" => Some(TaskCategory::Cleaning),
            "exercise" => Some(TaskCategory::Exercise),
            "creative" => Some(TaskCategory::Creative),
            "admin" | "administrative" => Some(TaskCategory::Admin),
            "selfcare" => Some(TaskCategory::SelfCare),
            "social" => Some(TaskCategory::Social),
            "learning" => Some(TaskCategory::Learning),
            "work" => Some(TaskCategory::Work),
            "household" => Some(TaskCategory::Household),
            _ => None,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Cleaning => "Cleaning",
            TaskCategory::Exercise => "Exercise",
            TaskCategory::Creative => "Creative",
            TaskCategory::Admin => "Admin",
            TaskCategory::SelfCare => "Self Care",
            TaskCategory::Social => "Social",
            TaskCategory::Learning => "Learning",
            TaskCategory::Work => "Work",
            TaskCategory::Household => "Household",
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reusable task template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Unique identifier
    pub id: String,
    /// Template title
    pub title: String,
    /// Longer description of the work
    pub description: String,
    /// Category, if the stored text mapped to a known one
    pub category: Option<TaskCategory>,
    /// Difficulty 1 (trivial) to 5 (demanding)
    pub difficulty: u8,
    /// Estimated duration in minutes
    pub estimated_minutes: u32,
    /// Raw mood range text, e.g. "1-4" or "2,5-7".
    ///
    /// Kept verbatim; parsing is tolerant and happens on demand via
    /// [`MoodRange::parse`]. Unset or unparsable text means the template
    /// matches any mood.
    pub mood_range: Option<String>,
    /// Default labels copied onto tasks created from this template
    pub default_labels: Vec<String>,
    /// Whether this is a seeded built-in (immutable, non-deletable)
    pub built_in: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl TaskTemplate {
    /// Parsed mood range, or `None` when the template matches any mood.
    pub fn parsed_mood_range(&self) -> Option<MoodRange> {
        self.mood_range.as_deref().and_then(MoodRange::parse)
    }

    /// Whether this template suits the given mood value.
    ///
    /// Templates without a parsable mood range match every mood.
    pub fn suits_mood(&self, mood_value: u8) -> bool {
        match self.parsed_mood_range() {
            Some(range) => range.contains(mood_value),
            None => true,
        }
    }
}

/// Fields for creating a new user template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTemplate {
    pub title: String,
    pub description: String,
    pub category: Option<TaskCategory>,
    pub difficulty: u8,
    pub estimated_minutes: u32,
    pub mood_range: Option<String>,
    pub default_labels: Vec<String>,
}
