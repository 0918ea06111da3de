//! Task labels: built-in seed set, CRUD and usage tracking.
//!
//! Labels are grouped free-text tags (energy, location, type, duration,
//! category) shown as pickers in clients. Usage counts feed the
//! most-used ordering; incrementing them is best-effort.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::storage::Database;

/// Built-in labels seeded on first run: (name, group, color, emoji).
const BUILTIN_LABELS: &[(&str, &str, &str, &str)] = &[
    // Energy
    ("High Energy", "Energy", "#FF6B6B", "⚡️"),
    ("Medium Energy", "Energy", "#4ECDC4", "🔋"),
    ("Low Energy", "Energy", "#95A5A6", "😴"),
    // Location
    ("Home", "Location", "#3498DB", "🏠"),
    ("Office", "Location", "#9B59B6", "🏢"),
    ("Outdoors", "Location", "#27AE60", "🌳"),
    ("Anywhere", "Location", "#F39C12", "📍"),
    // Type
    ("Creative", "Type", "#E74C3C", "🎨"),
    ("Physical", "Type", "#E67E22", "💪"),
    ("Mental", "Type", "#8E44AD", "🧠"),
    ("Social", "Type", "#1ABC9C", "👥"),
    ("Administrative", "Type", "#34495E", "📋"),
    // Duration
    ("Quick", "Duration", "#2ECC71", "⚡️"),
    ("Medium", "Duration", "#F1C40F", "⏰"),
    ("Long", "Duration", "#E74C3C", "⏳"),
    // Category
    ("Cleaning", "Category", "#3498DB", "🧹"),
    ("Exercise", "Category", "#E74C3C", "🏃"),
    ("Self Care", "Category", "#9B59B6", "🧘"),
    ("Learning", "Category", "#27AE60", "📚"),
    ("Work", "Category", "#34495E", "💼"),
    ("Household", "Category", "#E67E22", "🧺"),
];

/// A task label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLabel {
    /// Unique identifier
    pub id: String,
    /// Display name, unique per store
    pub name: String,
    /// Grouping (Energy, Location, Type, Duration, Category)
    pub group: String,
    /// Display color as #RRGGBB
    pub color_hex: String,
    /// Display emoji
    pub emoji: String,
    /// Whether this is a seeded built-in (non-deletable)
    pub built_in: bool,
    /// How many times the label has been applied
    pub usage_count: u32,
    /// Last time the label was applied
    pub last_used_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Service over the label store.
pub struct LabelStore<'a> {
    db: &'a Database,
}

impl<'a> LabelStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Seed the built-in labels exactly once (skipped if any exist).
    pub fn seed_builtins(&self) -> Result<usize, CoreError> {
        if self.db.has_builtin_labels()? {
            return Ok(0);
        }
        let now = Utc::now();
        for (name, group, color_hex, emoji) in BUILTIN_LABELS {
            let label = TaskLabel {
                id: Uuid::new_v4().to_string(),
                name: (*name).to_string(),
                group: (*group).to_string(),
                color_hex: (*color_hex).to_string(),
                emoji: (*emoji).to_string(),
                built_in: true,
                usage_count: 0,
                last_used_at: None,
                created_at: now,
            };
            self.db.insert_label(&label)?;
        }
        Ok(BUILTIN_LABELS.len())
    }

    /// All labels, grouped then most-used first.
    pub fn list_all(&self) -> Result<Vec<TaskLabel>, CoreError> {
        Ok(self.db.list_labels()?)
    }

    /// Labels in one group, most-used first.
    pub fn by_group(&self, group: &str) -> Result<Vec<TaskLabel>, CoreError> {
        Ok(self.db.list_labels_by_group(group)?)
    }

    /// The `limit` most-used labels.
    pub fn most_used(&self, limit: usize) -> Result<Vec<TaskLabel>, CoreError> {
        Ok(self.db.most_used_labels(limit)?)
    }

    /// Case-insensitive substring search over label names.
    pub fn search(&self, query: &str) -> Result<Vec<TaskLabel>, CoreError> {
        if query.is_empty() {
            return self.list_all();
        }
        Ok(self.db.search_labels(query)?)
    }

    /// Create a user label. Empty names are rejected.
    pub fn create(
        &self,
        name: &str,
        group: &str,
        color_hex: &str,
        emoji: &str,
    ) -> Result<TaskLabel, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "name".to_string(),
            }
            .into());
        }
        let label = TaskLabel {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            color_hex: color_hex.to_string(),
            emoji: emoji.to_string(),
            built_in: false,
            usage_count: 0,
            last_used_at: None,
            created_at: Utc::now(),
        };
        self.db.insert_label(&label)?;
        Ok(label)
    }

    /// Rename or restyle a user label. Built-ins are protected.
    pub fn update(
        &self,
        id: &str,
        name: &str,
        group: &str,
        color_hex: &str,
        emoji: &str,
    ) -> Result<TaskLabel, CoreError> {
        let mut label = self.db.get_label(id)?.ok_or(ValidationError::NotFound {
            kind: "Label",
            id: id.to_string(),
        })?;
        if label.built_in {
            return Err(ValidationError::ProtectedBuiltIn {
                kind: "label",
                name: label.name,
                action: "edited",
            }
            .into());
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "name".to_string(),
            }
            .into());
        }
        label.name = name.to_string();
        label.group = group.to_string();
        label.color_hex = color_hex.to_string();
        label.emoji = emoji.to_string();
        self.db.update_label(&label)?;
        Ok(label)
    }

    /// Delete a user label. Built-ins are protected.
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        let label = self.db.get_label(id)?.ok_or(ValidationError::NotFound {
            kind: "Label",
            id: id.to_string(),
        })?;
        if label.built_in {
            return Err(ValidationError::ProtectedBuiltIn {
                kind: "label",
                name: label.name,
                action: "deleted",
            }
            .into());
        }
        self.db.delete_label(id)?;
        Ok(())
    }

    /// Bump a label's usage count and last-used timestamp.
    ///
    /// Best-effort: store failures are swallowed so a missed increment
    /// never aborts the operation that applied the label.
    pub fn increment_usage(&self, id: &str) {
        if let Err(e) = self.db.increment_label_usage(id, Utc::now()) {
            eprintln!("Warning: failed to update label usage: {e}");
        }
    }
}
