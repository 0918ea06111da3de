//! Label management commands for CLI.

use clap::Subcommand;
use moodo_core::LabelStore;

use super::open_db;

#[derive(Subcommand)]
pub enum LabelAction {
    /// List labels
    List {
        /// Filter by group (Energy, Location, Type, Duration, Category)
        #[arg(long)]
        group: Option<String>,
    },
    /// Create a user label
    Create {
        /// Label name
        name: String,
        /// Label group
        #[arg(long, default_value = "Type")]
        group: String,
        /// Display color as #RRGGBB
        #[arg(long, default_value = "#3498DB")]
        color: String,
        /// Display emoji
        #[arg(long, default_value = "🏷️")]
        emoji: String,
    },
    /// Update a user label
    Update {
        /// Label ID
        id: String,
        /// New name
        #[arg(long)]
        name: String,
        /// New group
        #[arg(long, default_value = "Type")]
        group: String,
        /// New color
        #[arg(long, default_value = "#3498DB")]
        color: String,
        /// New emoji
        #[arg(long, default_value = "🏷️")]
        emoji: String,
    },
    /// Delete a user label (built-ins are protected)
    Delete {
        /// Label ID
        id: String,
    },
    /// Search labels by name
    Search {
        /// Substring to look for (case-insensitive)
        query: String,
    },
    /// Show the most-used labels
    MostUsed {
        /// How many to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

pub fn run(action: LabelAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_db()?;
    let store = LabelStore::new(&db);

    match action {
        LabelAction::List { group } => {
            let labels = match group {
                Some(group) => store.by_group(&group)?,
                None => store.list_all()?,
            };
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
        LabelAction::Create {
            name,
            group,
            color,
            emoji,
        } => {
            let label = store.create(&name, &group, &color, &emoji)?;
            println!("Label created: {}", label.id);
        }
        LabelAction::Update {
            id,
            name,
            group,
            color,
            emoji,
        } => {
            let label = store.update(&id, &name, &group, &color, &emoji)?;
            println!("Label updated: {}", label.name);
        }
        LabelAction::Delete { id } => {
            store.delete(&id)?;
            println!("Label deleted: {id}");
        }
        LabelAction::Search { query } => {
            let labels = store.search(&query)?;
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
        LabelAction::MostUsed { limit } => {
            let labels = store.most_used(limit)?;
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
    }
    Ok(())
}
