//! Mood entries and mood labels.
//!
//! Mood is a 1-10 self-rating. Each value has a default label and emoji;
//! users can override either per value, and overrides win on lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::storage::Database;

/// Default (label, emoji) pairs for mood values 1-10, worst to best.
const DEFAULT_MOOD_LABELS: [(&str, &str); 10] = [
    ("Terrible", "😭"),
    ("Very Bad", "😢"),
    ("Bad", "😔"),
    ("Poor", "😞"),
    ("Okay", "😐"),
    ("Good", "🙂"),
    ("Great", "😊"),
    ("Excellent", "😃"),
    ("Amazing", "😄"),
    ("Euphoric", "🤩"),
];

/// Default label for a mood value.
pub fn default_label(value: u8) -> &'static str {
    match value {
        1..=10 => DEFAULT_MOOD_LABELS[usize::from(value) - 1].0,
        _ => "Unknown",
    }
}

/// Default emoji for a mood value.
pub fn default_emoji(value: u8) -> &'static str {
    match value {
        1..=10 => DEFAULT_MOOD_LABELS[usize::from(value) - 1].1,
        _ => "❓",
    }
}

/// One logged mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier
    pub id: String,
    /// Mood value 1-10
    pub value: u8,
    /// Free-text tags attached at logging time
    pub tags: Vec<String>,
    /// When the mood was logged
    pub created_at: DateTime<Utc>,
}

/// A user override of the default label/emoji for one mood value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLabelOverride {
    /// Mood value 1-10 this override applies to
    pub value: u8,
    pub label: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

/// Service over the mood store.
pub struct MoodLog<'a> {
    db: &'a Database,
}

impl<'a> MoodLog<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Log a mood. The value must be on the 1-10 scale.
    pub fn log(&self, value: u8, tags: Vec<String>) -> Result<MoodEntry, CoreError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: "mood".to_string(),
                message: format!("{value} is outside 1-10"),
            }
            .into());
        }
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            value,
            tags,
            created_at: Utc::now(),
        };
        self.db.insert_mood_entry(&entry)?;
        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> Result<Vec<MoodEntry>, CoreError> {
        Ok(self.db.list_mood_entries()?)
    }

    /// Most recently logged mood, if any.
    pub fn latest(&self) -> Result<Option<MoodEntry>, CoreError> {
        Ok(self.db.latest_mood_entry()?)
    }

    /// Label for a mood value: user override first, then the default.
    ///
    /// Store failures fall back to the default rather than erroring.
    pub fn label_for(&self, value: u8) -> String {
        match self.db.get_mood_label_override(value) {
            Ok(Some(ov)) if !ov.label.is_empty() => ov.label,
            Ok(_) => default_label(value).to_string(),
            Err(e) => {
                eprintln!("Warning: failed to read mood label override: {e}");
                default_label(value).to_string()
            }
        }
    }

    /// Emoji for a mood value, same precedence as [`MoodLog::label_for`].
    pub fn emoji_for(&self, value: u8) -> String {
        match self.db.get_mood_label_override(value) {
            Ok(Some(ov)) if !ov.emoji.is_empty() => ov.emoji,
            Ok(_) => default_emoji(value).to_string(),
            Err(e) => {
                eprintln!("Warning: failed to read mood label override: {e}");
                default_emoji(value).to_string()
            }
        }
    }

    /// Set or replace the override for one mood value.
    pub fn set_label(&self, value: u8, label: &str, emoji: &str) -> Result<(), CoreError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: "mood".to_string(),
                message: format!("{value} is outside 1-10"),
            }
            .into());
        }
        let ov = MoodLabelOverride {
            value,
            label: label.to_string(),
            emoji: emoji.to_string(),
            created_at: Utc::now(),
        };
        self.db.upsert_mood_label_override(&ov)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_span_scale() {
        assert_eq!(default_label(1), "Terrible");
        assert_eq!(default_label(5), "Okay");
        assert_eq!(default_label(10), "Euphoric");
        assert_eq!(default_label(0), "Unknown");
        assert_eq!(default_label(11), "Unknown");
        assert_eq!(default_emoji(7), "😊");
        assert_eq!(default_emoji(42), "❓");
    }

    #[test]
    fn log_rejects_out_of_scale_values() {
        let db = Database::open_memory().unwrap();
        let log = MoodLog::new(&db);
        assert!(log.log(0, Vec::new()).is_err());
        assert!(log.log(11, Vec::new()).is_err());
        assert!(log.log(7, Vec::new()).is_ok());
    }

    #[test]
    fn latest_returns_newest_entry() {
        let db = Database::open_memory().unwrap();
        let log = MoodLog::new(&db);
        log.log(3, Vec::new()).unwrap();
        let second = log.log(8, vec!["energized".to_string()]).unwrap();
        let latest = log.latest().unwrap().unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.value, 8);
    }

    #[test]
    fn override_wins_over_default() {
        let db = Database::open_memory().unwrap();
        let log = MoodLog::new(&db);
        assert_eq!(log.label_for(5), "Okay");
        log.set_label(5, "Meh", "🫤").unwrap();
        assert_eq!(log.label_for(5), "Meh");
        assert_eq!(log.emoji_for(5), "🫤");
        // Other values keep their defaults.
        assert_eq!(log.label_for(6), "Good");
    }
}
