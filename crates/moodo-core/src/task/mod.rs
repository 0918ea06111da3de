//! Task records and the template-to-task factory.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::template::{TaskCategory, TaskTemplate};

/// A concrete to-do item.
///
/// Tasks created from a template are value-copy snapshots: no live link
/// back to the template remains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Category, if any
    pub category: Option<TaskCategory>,
    /// Difficulty 1-5
    pub difficulty: u8,
    /// Estimated duration in minutes
    pub estimated_minutes: u32,
    /// Free-text labels
    pub labels: Vec<String>,
    /// Whether the task is done
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Due timestamp; defaults to one day after creation for tasks made
    /// from a template
    pub due_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task with the given title and defaults everywhere else.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            category: None,
            difficulty: 1,
            estimated_minutes: 0,
            labels: Vec::new(),
            completed: false,
            created_at: now,
            due_at: None,
        }
    }

    /// Materialize a task from an accepted template.
    ///
    /// Copies title, description, category, difficulty, duration and
    /// default labels verbatim; stamps creation now and due one day out.
    pub fn from_template(template: &TaskTemplate) -> Self {
        Self::from_template_at(template, Utc::now())
    }

    /// Same as [`Task::from_template`] with an explicit creation instant.
    pub fn from_template_at(template: &TaskTemplate, now: DateTime<Utc>) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            title: template.title.clone(),
            description: template.description.clone(),
            category: template.category,
            difficulty: template.difficulty,
            estimated_minutes: template.estimated_minutes,
            labels: template.default_labels.clone(),
            completed: false,
            created_at: now,
            due_at: Some(now + Duration::days(1)),
        }
    }
}
