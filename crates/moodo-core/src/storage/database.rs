//! SQLite-based storage for templates, suggestions, tasks, moods,
//! journal entries and labels.
//!
//! All queries are typed methods; there are no string-built predicates.
//! Row decoding is lenient: malformed timestamps fall back to now,
//! malformed JSON lists to empty.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{data_dir, migrations};
use crate::error::{CoreError, DatabaseError};
use crate::journal::JournalEntry;
use crate::label::TaskLabel;
use crate::mood::{MoodEntry, MoodLabelOverride};
use crate::suggest::{SuggestionRecord, TimeOfDay};
use crate::task::Task;
use crate::template::{TaskCategory, TaskTemplate};

// === Helper Functions ===

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Parse an optional RFC3339 column; unparsable text becomes None
fn parse_optional_datetime(dt_str: Option<String>) -> Option<DateTime<Utc>> {
    dt_str
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Decode a JSON string list column; malformed JSON becomes empty
fn parse_string_list(json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Format a category for storage
fn format_category(category: Option<TaskCategory>) -> Option<&'static str> {
    category.map(|c| c.as_str())
}

/// Parse a stored category string
fn parse_category(category_str: Option<&str>) -> Option<TaskCategory> {
    category_str.and_then(TaskCategory::parse)
}

fn row_to_template(row: &rusqlite::Row) -> Result<TaskTemplate, rusqlite::Error> {
    let category_str: Option<String> = row.get(3)?;
    let labels_json: String = row.get(7)?;
    let created_at_str: String = row.get(9)?;
    Ok(TaskTemplate {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: parse_category(category_str.as_deref()),
        difficulty: row.get(4)?,
        estimated_minutes: row.get(5)?,
        mood_range: row.get(6)?,
        default_labels: parse_string_list(&labels_json),
        built_in: row.get(8)?,
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

fn row_to_suggestion(row: &rusqlite::Row) -> Result<SuggestionRecord, rusqlite::Error> {
    let time_of_day_str: String = row.get(3)?;
    let suggested_at_str: String = row.get(4)?;
    let responded_at_str: Option<String> = row.get(6)?;
    Ok(SuggestionRecord {
        id: row.get(0)?,
        template_id: row.get(1)?,
        mood_value: row.get(2)?,
        time_of_day: TimeOfDay::parse(&time_of_day_str),
        suggested_at: parse_datetime_fallback(&suggested_at_str),
        accepted: row.get(5)?,
        responded_at: parse_optional_datetime(responded_at_str),
    })
}

fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let category_str: Option<String> = row.get(3)?;
    let labels_json: String = row.get(6)?;
    let created_at_str: String = row.get(8)?;
    let due_at_str: Option<String> = row.get(9)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: parse_category(category_str.as_deref()),
        difficulty: row.get(4)?,
        estimated_minutes: row.get(5)?,
        labels: parse_string_list(&labels_json),
        completed: row.get(7)?,
        created_at: parse_datetime_fallback(&created_at_str),
        due_at: parse_optional_datetime(due_at_str),
    })
}

fn row_to_label(row: &rusqlite::Row) -> Result<TaskLabel, rusqlite::Error> {
    let last_used_at_str: Option<String> = row.get(7)?;
    let created_at_str: String = row.get(8)?;
    Ok(TaskLabel {
        id: row.get(0)?,
        name: row.get(1)?,
        group: row.get(2)?,
        color_hex: row.get(3)?,
        emoji: row.get(4)?,
        built_in: row.get(5)?,
        usage_count: row.get(6)?,
        last_used_at: parse_optional_datetime(last_used_at_str),
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

const TEMPLATE_COLUMNS: &str = "id, title, description, category, difficulty, estimated_minutes,
             mood_range, default_labels, built_in, created_at";

const SUGGESTION_COLUMNS: &str =
    "id, template_id, mood_value, time_of_day, suggested_at, accepted, responded_at";

const TASK_COLUMNS: &str = "id, title, description, category, difficulty, estimated_minutes,
             labels, completed, created_at, due_at";

const LABEL_COLUMNS: &str = "id, name, label_group, color_hex, emoji, built_in, usage_count,
             last_used_at, created_at";

/// SQLite database for all moodo records.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/moodo.db`.
    ///
    /// Creates the file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()
            .map_err(|e| CoreError::Custom(e.to_string()))?
            .join("moodo.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    /// Open a database at an explicit path (used by tests and tooling).
    pub fn open_at(path: &std::path::Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(|source| DatabaseError::OpenFailed {
            path: std::path::PathBuf::from(":memory:"),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS templates (
                id                TEXT PRIMARY KEY,
                title             TEXT NOT NULL,
                description       TEXT NOT NULL DEFAULT '',
                category          TEXT,
                difficulty        INTEGER NOT NULL DEFAULT 1,
                estimated_minutes INTEGER NOT NULL DEFAULT 0,
                mood_range        TEXT,
                default_labels    TEXT NOT NULL DEFAULT '[]',
                built_in          INTEGER NOT NULL DEFAULT 0,
                created_at        TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS suggestions (
                id           TEXT PRIMARY KEY,
                template_id  TEXT NOT NULL,
                mood_value   INTEGER NOT NULL,
                time_of_day  TEXT NOT NULL,
                suggested_at TEXT NOT NULL,
                accepted     INTEGER NOT NULL DEFAULT 0,
                responded_at TEXT
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id                TEXT PRIMARY KEY,
                title             TEXT NOT NULL,
                description       TEXT NOT NULL DEFAULT '',
                category          TEXT,
                difficulty        INTEGER NOT NULL DEFAULT 1,
                estimated_minutes INTEGER NOT NULL DEFAULT 0,
                labels            TEXT NOT NULL DEFAULT '[]',
                completed         INTEGER NOT NULL DEFAULT 0,
                created_at        TEXT NOT NULL,
                due_at            TEXT
            );

            CREATE TABLE IF NOT EXISTS mood_entries (
                id         TEXT PRIMARY KEY,
                value      INTEGER NOT NULL,
                tags       TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS mood_labels (
                value      INTEGER PRIMARY KEY,
                label      TEXT NOT NULL,
                emoji      TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS journal_entries (
                id         TEXT PRIMARY KEY,
                text       TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS labels (
                id           TEXT PRIMARY KEY,
                name         TEXT NOT NULL,
                label_group  TEXT NOT NULL,
                color_hex    TEXT NOT NULL,
                emoji        TEXT NOT NULL,
                built_in     INTEGER NOT NULL DEFAULT 0,
                usage_count  INTEGER NOT NULL DEFAULT 0,
                last_used_at TEXT,
                created_at   TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_suggestions_template ON suggestions(template_id);
            CREATE INDEX IF NOT EXISTS idx_suggestions_mood ON suggestions(mood_value);
            CREATE INDEX IF NOT EXISTS idx_labels_group ON labels(label_group);",
        )?;

        migrations::migrate(&self.conn)?;
        Ok(())
    }

    // === Templates ===

    /// Insert a new template.
    pub fn insert_template(&self, template: &TaskTemplate) -> Result<(), rusqlite::Error> {
        let labels_json = serde_json::to_string(&template.default_labels).unwrap();
        self.conn.execute(
            "INSERT INTO templates (
                id, title, description, category, difficulty, estimated_minutes,
                mood_range, default_labels, built_in, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                template.id,
                template.title,
                template.description,
                format_category(template.category),
                template.difficulty,
                template.estimated_minutes,
                template.mood_range,
                labels_json,
                template.built_in,
                template.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a template by id.
    pub fn get_template(&self, id: &str) -> Result<Option<TaskTemplate>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TEMPLATE_COLUMNS} FROM templates WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], row_to_template);
        match result {
            Ok(template) => Ok(Some(template)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All templates, built-ins first, then by category and title.
    pub fn list_templates(&self) -> Result<Vec<TaskTemplate>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates
             ORDER BY built_in DESC, category ASC, title ASC"
        ))?;
        let rows = stmt.query_map([], row_to_template)?;
        rows.collect()
    }

    /// All templates in title order (the suggestion engine's fetch order).
    pub fn list_templates_by_title(&self) -> Result<Vec<TaskTemplate>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TEMPLATE_COLUMNS} FROM templates ORDER BY title ASC"))?;
        let rows = stmt.query_map([], row_to_template)?;
        rows.collect()
    }

    /// Templates in one category, by title.
    pub fn list_templates_by_category(
        &self,
        category: TaskCategory,
    ) -> Result<Vec<TaskTemplate>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates WHERE category = ?1 ORDER BY title ASC"
        ))?;
        let rows = stmt.query_map(params![category.as_str()], row_to_template)?;
        rows.collect()
    }

    /// Whether any built-in template exists (seeding guard).
    pub fn has_builtin_templates(&self) -> Result<bool, rusqlite::Error> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM templates WHERE built_in = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Update an existing template.
    pub fn update_template(&self, template: &TaskTemplate) -> Result<(), rusqlite::Error> {
        let labels_json = serde_json::to_string(&template.default_labels).unwrap();
        self.conn.execute(
            "UPDATE templates
             SET title = ?1, description = ?2, category = ?3, difficulty = ?4,
                 estimated_minutes = ?5, mood_range = ?6, default_labels = ?7
             WHERE id = ?8",
            params![
                template.title,
                template.description,
                format_category(template.category),
                template.difficulty,
                template.estimated_minutes,
                template.mood_range,
                labels_json,
                template.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a template by id.
    pub fn delete_template(&self, id: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM templates WHERE id = ?1", params![id])?;
        Ok(())
    }

    // === Suggestions ===

    /// Insert a suggestion history row.
    pub fn insert_suggestion(&self, record: &SuggestionRecord) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO suggestions (
                id, template_id, mood_value, time_of_day, suggested_at, accepted, responded_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.template_id,
                record.mood_value,
                record.time_of_day.as_str(),
                record.suggested_at.to_rfc3339(),
                record.accepted,
                record.responded_at.map(|dt| dt.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Get a suggestion by id.
    pub fn get_suggestion(&self, id: &str) -> Result<Option<SuggestionRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM suggestions WHERE id = ?1"
        ))?;
        let result = stmt.query_row(params![id], row_to_suggestion);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Update a suggestion row (acceptance flag and response timestamp).
    pub fn update_suggestion(&self, record: &SuggestionRecord) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "UPDATE suggestions
             SET accepted = ?1, responded_at = ?2
             WHERE id = ?3",
            params![
                record.accepted,
                record.responded_at.map(|dt| dt.to_rfc3339()),
                record.id,
            ],
        )?;
        Ok(())
    }

    /// History rows whose recorded mood is within `band` of `mood_value`.
    pub fn suggestions_in_mood_band(
        &self,
        mood_value: u8,
        band: u8,
    ) -> Result<Vec<SuggestionRecord>, rusqlite::Error> {
        let low = i64::from(mood_value) - i64::from(band);
        let high = i64::from(mood_value) + i64::from(band);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM suggestions
             WHERE mood_value BETWEEN ?1 AND ?2
             ORDER BY suggested_at ASC, rowid ASC"
        ))?;
        let rows = stmt.query_map(params![low, high], row_to_suggestion)?;
        rows.collect()
    }

    /// All history rows, newest first.
    pub fn list_suggestions(&self) -> Result<Vec<SuggestionRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM suggestions
             ORDER BY suggested_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], row_to_suggestion)?;
        rows.collect()
    }

    /// All history rows for one template, oldest first.
    pub fn suggestions_for_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<SuggestionRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM suggestions
             WHERE template_id = ?1
             ORDER BY suggested_at ASC, rowid ASC"
        ))?;
        let rows = stmt.query_map(params![template_id], row_to_suggestion)?;
        rows.collect()
    }

    // === Tasks ===

    /// Insert a new task.
    pub fn insert_task(&self, task: &Task) -> Result<(), rusqlite::Error> {
        let labels_json = serde_json::to_string(&task.labels).unwrap();
        self.conn.execute(
            "INSERT INTO tasks (
                id, title, description, category, difficulty, estimated_minutes,
                labels, completed, created_at, due_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                task.id,
                task.title,
                task.description,
                format_category(task.category),
                task.difficulty,
                task.estimated_minutes,
                labels_json,
                task.completed,
                task.created_at.to_rfc3339(),
                task.due_at.map(|dt| dt.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Get a task by id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], row_to_task);
        match result {
            Ok(task) => Ok(Some(task)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All tasks, newest first.
    pub fn list_tasks(&self) -> Result<Vec<Task>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], row_to_task)?;
        rows.collect()
    }

    /// Update an existing task.
    pub fn update_task(&self, task: &Task) -> Result<(), rusqlite::Error> {
        let labels_json = serde_json::to_string(&task.labels).unwrap();
        self.conn.execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, category = ?3, difficulty = ?4,
                 estimated_minutes = ?5, labels = ?6, completed = ?7, due_at = ?8
             WHERE id = ?9",
            params![
                task.title,
                task.description,
                format_category(task.category),
                task.difficulty,
                task.estimated_minutes,
                labels_json,
                task.completed,
                task.due_at.map(|dt| dt.to_rfc3339()),
                task.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a task by id. Returns whether a row was removed.
    pub fn delete_task(&self, id: &str) -> Result<bool, rusqlite::Error> {
        let affected = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // === Mood entries ===

    /// Insert a mood entry.
    pub fn insert_mood_entry(&self, entry: &MoodEntry) -> Result<(), rusqlite::Error> {
        let tags_json = serde_json::to_string(&entry.tags).unwrap();
        self.conn.execute(
            "INSERT INTO mood_entries (id, value, tags, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id,
                entry.value,
                tags_json,
                entry.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// All mood entries, newest first.
    pub fn list_mood_entries(&self) -> Result<Vec<MoodEntry>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, value, tags, created_at FROM mood_entries
             ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let tags_json: String = row.get(2)?;
            let created_at_str: String = row.get(3)?;
            Ok(MoodEntry {
                id: row.get(0)?,
                value: row.get(1)?,
                tags: parse_string_list(&tags_json),
                created_at: parse_datetime_fallback(&created_at_str),
            })
        })?;
        rows.collect()
    }

    /// Most recent mood entry, if any.
    pub fn latest_mood_entry(&self) -> Result<Option<MoodEntry>, rusqlite::Error> {
        Ok(self.list_mood_entries()?.into_iter().next())
    }

    /// Get the label override for one mood value.
    pub fn get_mood_label_override(
        &self,
        value: u8,
    ) -> Result<Option<MoodLabelOverride>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT value, label, emoji, created_at FROM mood_labels WHERE value = ?1",
        )?;
        let result = stmt.query_row(params![value], |row| {
            let created_at_str: String = row.get(3)?;
            Ok(MoodLabelOverride {
                value: row.get(0)?,
                label: row.get(1)?,
                emoji: row.get(2)?,
                created_at: parse_datetime_fallback(&created_at_str),
            })
        });
        match result {
            Ok(ov) => Ok(Some(ov)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Insert or replace the label override for one mood value.
    pub fn upsert_mood_label_override(
        &self,
        ov: &MoodLabelOverride,
    ) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO mood_labels (value, label, emoji, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![ov.value, ov.label, ov.emoji, ov.created_at.to_rfc3339()],
        )?;
        Ok(())
    }

    // === Journal entries ===

    /// Insert a journal entry.
    pub fn insert_journal_entry(&self, entry: &JournalEntry) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO journal_entries (id, text, created_at) VALUES (?1, ?2, ?3)",
            params![entry.id, entry.text, entry.created_at.to_rfc3339()],
        )?;
        Ok(())
    }

    /// All journal entries, newest first.
    pub fn list_journal_entries(&self) -> Result<Vec<JournalEntry>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, created_at FROM journal_entries
             ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            let created_at_str: String = row.get(2)?;
            Ok(JournalEntry {
                id: row.get(0)?,
                text: row.get(1)?,
                created_at: parse_datetime_fallback(&created_at_str),
            })
        })?;
        rows.collect()
    }

    /// Delete a journal entry. Returns whether a row was removed.
    pub fn delete_journal_entry(&self, id: &str) -> Result<bool, rusqlite::Error> {
        let affected = self
            .conn
            .execute("DELETE FROM journal_entries WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // === Labels ===

    /// Insert a label.
    pub fn insert_label(&self, label: &TaskLabel) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO labels (
                id, name, label_group, color_hex, emoji, built_in, usage_count,
                last_used_at, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                label.id,
                label.name,
                label.group,
                label.color_hex,
                label.emoji,
                label.built_in,
                label.usage_count,
                label.last_used_at.map(|dt| dt.to_rfc3339()),
                label.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a label by id.
    pub fn get_label(&self, id: &str) -> Result<Option<TaskLabel>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {LABEL_COLUMNS} FROM labels WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], row_to_label);
        match result {
            Ok(label) => Ok(Some(label)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All labels, grouped then most-used first.
    pub fn list_labels(&self) -> Result<Vec<TaskLabel>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LABEL_COLUMNS} FROM labels
             ORDER BY label_group ASC, usage_count DESC, name ASC"
        ))?;
        let rows = stmt.query_map([], row_to_label)?;
        rows.collect()
    }

    /// Labels in one group, most-used first.
    pub fn list_labels_by_group(&self, group: &str) -> Result<Vec<TaskLabel>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LABEL_COLUMNS} FROM labels WHERE label_group = ?1
             ORDER BY usage_count DESC, name ASC"
        ))?;
        let rows = stmt.query_map(params![group], row_to_label)?;
        rows.collect()
    }

    /// The most-used labels, capped at `limit`.
    pub fn most_used_labels(&self, limit: usize) -> Result<Vec<TaskLabel>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LABEL_COLUMNS} FROM labels
             ORDER BY usage_count DESC, name ASC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit as i64], row_to_label)?;
        rows.collect()
    }

    /// Case-insensitive substring search over label names.
    pub fn search_labels(&self, query: &str) -> Result<Vec<TaskLabel>, rusqlite::Error> {
        let pattern = format!("%{query}%");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LABEL_COLUMNS} FROM labels WHERE name LIKE ?1
             ORDER BY usage_count DESC, name ASC"
        ))?;
        let rows = stmt.query_map(params![pattern], row_to_label)?;
        rows.collect()
    }

    /// Update a label's editable fields.
    pub fn update_label(&self, label: &TaskLabel) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "UPDATE labels
             SET name = ?1, label_group = ?2, color_hex = ?3, emoji = ?4
             WHERE id = ?5",
            params![
                label.name,
                label.group,
                label.color_hex,
                label.emoji,
                label.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a label by id.
    pub fn delete_label(&self, id: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM labels WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Whether any built-in label exists (seeding guard).
    pub fn has_builtin_labels(&self) -> Result<bool, rusqlite::Error> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM labels WHERE built_in = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Bump a label's usage count and last-used timestamp.
    pub fn increment_label_usage(
        &self,
        id: &str,
        used_at: DateTime<Utc>,
    ) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "UPDATE labels
             SET usage_count = usage_count + 1, last_used_at = ?2
             WHERE id = ?1",
            params![id, used_at.to_rfc3339()],
        )?;
        Ok(())
    }
}
