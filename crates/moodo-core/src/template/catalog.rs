//! Template catalog service: seeding, CRUD and validation.

use chrono::Utc;
use uuid::Uuid;

use super::{NewTemplate, TaskCategory, TaskTemplate};
use crate::error::{CoreError, ValidationError};
use crate::storage::Database;

/// Built-in templates seeded on first run.
///
/// (title, description, category, difficulty, minutes, mood range, labels)
const BUILTIN_TEMPLATES: &[(
    &str,
    &str,
    TaskCategory,
    u8,
    u32,
    &str,
    &str,
)] = &[
    // Low mood (1-3)
    ("Tidy Desk", "Organize and clean your workspace", TaskCategory::Cleaning, 1, 15, "1-4", "Low Energy, Home, Quick"),
    ("Listen to Music", "Play your favorite calming playlist", TaskCategory::SelfCare, 1, 30, "1-5", "Low Energy, Anywhere, Self Care"),
    ("Water Plants", "Check and water your indoor plants", TaskCategory::Household, 1, 10, "1-6", "Low Energy, Home, Quick"),
    ("Make Tea", "Brew a warm, comforting cup of tea", TaskCategory::SelfCare, 1, 10, "1-5", "Low Energy, Home, Quick"),
    ("Gentle Stretching", "Do light stretches or yoga", TaskCategory::Exercise, 2, 20, "1-6", "Low Energy, Home, Physical"),
    // Medium mood (4-6)
    ("Grocery Shopping", "Buy weekly groceries and essentials", TaskCategory::Household, 3, 60, "4-7", "Medium Energy, Outdoors, Administrative"),
    ("Respond to Emails", "Clear your email inbox", TaskCategory::Work, 3, 45, "4-8", "Medium Energy, Anywhere, Administrative"),
    ("Laundry", "Wash, dry, and fold clothes", TaskCategory::Household, 2, 90, "3-7", "Medium Energy, Home, Household"),
    ("Read a Book", "Read a chapter or two", TaskCategory::Learning, 2, 30, "3-8", "Medium Energy, Anywhere, Learning"),
    ("Meal Prep", "Prepare meals for tomorrow", TaskCategory::Household, 3, 45, "4-7", "Medium Energy, Home, Household"),
    // High mood (7-10)
    ("Deep Clean Room", "Thoroughly clean and organize bedroom", TaskCategory::Cleaning, 4, 120, "6-10", "High Energy, Home, Physical"),
    ("Go for a Run", "Take an energizing outdoor run", TaskCategory::Exercise, 4, 45, "7-10", "High Energy, Outdoors, Physical"),
    ("Creative Project", "Work on art, music, or writing", TaskCategory::Creative, 3, 90, "6-10", "High Energy, Anywhere, Creative"),
    ("Learn New Skill", "Practice a new language or skill", TaskCategory::Learning, 4, 60, "7-10", "High Energy, Anywhere, Learning"),
    ("Social Activity", "Call friends or plan social event", TaskCategory::Social, 3, 60, "7-10", "High Energy, Anywhere, Social"),
    // Any mood
    ("Meditation", "Practice mindfulness meditation", TaskCategory::SelfCare, 2, 20, "1-10", "Any Energy, Anywhere, Self Care"),
    ("Journal Writing", "Write thoughts and reflections", TaskCategory::SelfCare, 2, 25, "1-10", "Any Energy, Anywhere, Self Care"),
    ("Quick Walk", "Take a short walk around the block", TaskCategory::Exercise, 2, 20, "3-10", "Any Energy, Outdoors, Physical"),
    ("Organize Photos", "Sort and organize digital photos", TaskCategory::Admin, 2, 45, "3-8", "Medium Energy, Anywhere, Administrative"),
    ("Plan Tomorrow", "Review and plan next day's schedule", TaskCategory::Admin, 3, 30, "4-9", "Medium Energy, Anywhere, Administrative"),
];

/// Fields that can change on an existing user template.
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Option<TaskCategory>>,
    pub difficulty: Option<u8>,
    pub estimated_minutes: Option<u32>,
    pub mood_range: Option<Option<String>>,
    pub default_labels: Option<Vec<String>>,
}

/// Service over the template store.
///
/// Constructed once at process start and passed by reference; there is no
/// ambient singleton.
pub struct TemplateCatalog<'a> {
    db: &'a Database,
}

impl<'a> TemplateCatalog<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Seed the built-in templates exactly once.
    ///
    /// Skipped entirely when any built-in already exists; no merging or
    /// diffing. Returns the number of templates inserted.
    pub fn seed_builtins(&self) -> Result<usize, CoreError> {
        if self.db.has_builtin_templates()? {
            return Ok(0);
        }
        let now = Utc::now();
        for (title, description, category, difficulty, minutes, mood_range, labels) in
            BUILTIN_TEMPLATES
        {
            let template = TaskTemplate {
                id: Uuid::new_v4().to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
                category: Some(*category),
                difficulty: *difficulty,
                estimated_minutes: *minutes,
                mood_range: Some((*mood_range).to_string()),
                default_labels: split_labels(labels),
                built_in: true,
                created_at: now,
            };
            self.db.insert_template(&template)?;
        }
        Ok(BUILTIN_TEMPLATES.len())
    }

    /// List every template, built-ins first, then by category and title.
    pub fn list_all(&self) -> Result<Vec<TaskTemplate>, CoreError> {
        Ok(self.db.list_templates()?)
    }

    /// List templates in one category, by title.
    pub fn list_by_category(&self, category: TaskCategory) -> Result<Vec<TaskTemplate>, CoreError> {
        Ok(self.db.list_templates_by_category(category)?)
    }

    /// Fetch one template.
    pub fn get(&self, id: &str) -> Result<Option<TaskTemplate>, CoreError> {
        Ok(self.db.get_template(id)?)
    }

    /// Create a user template.
    pub fn create(&self, new: NewTemplate) -> Result<TaskTemplate, CoreError> {
        let title = new.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "title".to_string(),
            }
            .into());
        }
        validate_difficulty(new.difficulty)?;
        if self.title_exists(&title)? {
            return Err(ValidationError::DuplicateTitle { title }.into());
        }

        let template = TaskTemplate {
            id: Uuid::new_v4().to_string(),
            title,
            description: new.description,
            category: new.category,
            difficulty: new.difficulty,
            estimated_minutes: new.estimated_minutes,
            mood_range: new.mood_range,
            default_labels: new.default_labels,
            built_in: false,
            created_at: Utc::now(),
        };
        self.db.insert_template(&template)?;
        Ok(template)
    }

    /// Update a user template. Built-ins are immutable.
    pub fn update(&self, id: &str, fields: TemplateUpdate) -> Result<TaskTemplate, CoreError> {
        let mut template = self.db.get_template(id)?.ok_or(ValidationError::NotFound {
            kind: "Template",
            id: id.to_string(),
        })?;
        if template.built_in {
            return Err(ValidationError::ProtectedBuiltIn {
                kind: "template",
                name: template.title,
                action: "edited",
            }
            .into());
        }

        if let Some(title) = fields.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ValidationError::EmptyField {
                    field: "title".to_string(),
                }
                .into());
            }
            if !title.eq_ignore_ascii_case(&template.title) && self.title_exists(&title)? {
                return Err(ValidationError::DuplicateTitle { title }.into());
            }
            template.title = title;
        }
        if let Some(description) = fields.description {
            template.description = description;
        }
        if let Some(category) = fields.category {
            template.category = category;
        }
        if let Some(difficulty) = fields.difficulty {
            validate_difficulty(difficulty)?;
            template.difficulty = difficulty;
        }
        if let Some(minutes) = fields.estimated_minutes {
            template.estimated_minutes = minutes;
        }
        if let Some(mood_range) = fields.mood_range {
            template.mood_range = mood_range;
        }
        if let Some(labels) = fields.default_labels {
            template.default_labels = labels;
        }

        self.db.update_template(&template)?;
        Ok(template)
    }

    /// Delete a user template. Built-ins are protected.
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        let template = self.db.get_template(id)?.ok_or(ValidationError::NotFound {
            kind: "Template",
            id: id.to_string(),
        })?;
        if template.built_in {
            return Err(ValidationError::ProtectedBuiltIn {
                kind: "template",
                name: template.title,
                action: "deleted",
            }
            .into());
        }
        self.db.delete_template(id)?;
        Ok(())
    }

    fn title_exists(&self, title: &str) -> Result<bool, CoreError> {
        let existing = self.db.list_templates()?;
        Ok(existing
            .iter()
            .any(|t| t.title.eq_ignore_ascii_case(title)))
    }
}

fn validate_difficulty(difficulty: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&difficulty) {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: "difficulty".to_string(),
            message: format!("{difficulty} is outside 1-5"),
        })
    }
}

/// Split a comma-separated label string into trimmed, non-empty labels.
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Join labels back into the comma-separated display form.
pub fn join_labels(labels: &[String]) -> String {
    labels.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_covers_mood_scale() {
        // Every mood value 1-10 has at least one suitable built-in.
        for mood in 1u8..=10 {
            let suitable = BUILTIN_TEMPLATES.iter().any(|(_, _, _, _, _, range, _)| {
                crate::template::MoodRange::parse(range)
                    .map(|r| r.contains(mood))
                    .unwrap_or(false)
            });
            assert!(suitable, "no built-in template suits mood {mood}");
        }
    }

    #[test]
    fn builtin_difficulties_in_bounds() {
        for (title, _, _, difficulty, minutes, _, _) in BUILTIN_TEMPLATES {
            assert!((1..=5).contains(difficulty), "{title} difficulty out of range");
            assert!(*minutes > 0, "{title} has zero duration");
        }
    }

    #[test]
    fn split_labels_trims_and_drops_empty() {
        assert_eq!(
            split_labels("Low Energy, Home , Quick,,"),
            vec!["Low Energy", "Home", "Quick"]
        );
        assert!(split_labels("").is_empty());
    }
}
