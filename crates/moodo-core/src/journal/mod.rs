//! Journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::storage::Database;

/// One journal entry: free text plus a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier
    pub id: String,
    /// Entry text
    pub text: String,
    /// When the entry was written
    pub created_at: DateTime<Utc>,
}

/// Service over the journal store.
pub struct Journal<'a> {
    db: &'a Database,
}

impl<'a> Journal<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append an entry. Empty text is rejected.
    pub fn add(&self, text: &str) -> Result<JournalEntry, CoreError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "text".to_string(),
            }
            .into());
        }
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.db.insert_journal_entry(&entry)?;
        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> Result<Vec<JournalEntry>, CoreError> {
        Ok(self.db.list_journal_entries()?)
    }

    /// Delete an entry by id.
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        let deleted = self.db.delete_journal_entry(id)?;
        if !deleted {
            return Err(ValidationError::NotFound {
                kind: "Journal entry",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
