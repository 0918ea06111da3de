//! Journal commands for CLI.

use clap::Subcommand;
use moodo_core::Journal;

use super::open_db;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Add {
        /// Entry text
        text: String,
    },
    /// List entries, newest first
    List,
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_db()?;
    let journal = Journal::new(&db);

    match action {
        JournalAction::Add { text } => {
            let entry = journal.add(&text)?;
            println!("Journal entry created: {}", entry.id);
        }
        JournalAction::List => {
            let entries = journal.list()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        JournalAction::Delete { id } => {
            journal.delete(&id)?;
            println!("Journal entry deleted: {id}");
        }
    }
    Ok(())
}
