//! Template catalog commands for CLI.

use clap::Subcommand;
use moodo_core::template::split_labels;
use moodo_core::{NewTemplate, TaskCategory, TemplateCatalog, TemplateUpdate};

use super::open_db;

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List templates
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },
    /// Create a user template
    Create {
        /// Template title
        title: String,
        /// Template description
        #[arg(long, default_value = "")]
        description: String,
        /// Category
        #[arg(long)]
        category: Option<String>,
        /// Difficulty 1-5
        #[arg(long, default_value = "1")]
        difficulty: u8,
        /// Estimated duration in minutes
        #[arg(long, default_value = "30")]
        minutes: u32,
        /// Mood range, e.g. "3-7" or "1-2,9-10"
        #[arg(long)]
        mood_range: Option<String>,
        /// Comma-separated default labels
        #[arg(long)]
        labels: Option<String>,
    },
    /// Update a user template
    Update {
        /// Template ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New difficulty
        #[arg(long)]
        difficulty: Option<u8>,
        /// New duration in minutes
        #[arg(long)]
        minutes: Option<u32>,
        /// New mood range; pass an empty string to clear it
        #[arg(long)]
        mood_range: Option<String>,
        /// New comma-separated default labels
        #[arg(long)]
        labels: Option<String>,
    },
    /// Delete a user template (built-ins are protected)
    Delete {
        /// Template ID
        id: String,
    },
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_db()?;
    let catalog = TemplateCatalog::new(&db);

    match action {
        TemplateAction::List { category } => {
            let templates = match category {
                Some(text) => {
                    let category = TaskCategory::parse(&text)
                        .ok_or(format!("Unknown category: {text}"))?;
                    catalog.list_by_category(category)?
                }
                None => catalog.list_all()?,
            };
            println!("{}", serde_json::to_string_pretty(&templates)?);
        }
        TemplateAction::Create {
            title,
            description,
            category,
            difficulty,
            minutes,
            mood_range,
            labels,
        } => {
            let template = catalog.create(NewTemplate {
                title,
                description,
                category: category.as_deref().and_then(TaskCategory::parse),
                difficulty,
                estimated_minutes: minutes,
                mood_range,
                default_labels: labels.map(|l| split_labels(&l)).unwrap_or_default(),
            })?;
            println!("Template created: {}", template.id);
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        TemplateAction::Update {
            id,
            title,
            description,
            category,
            difficulty,
            minutes,
            mood_range,
            labels,
        } => {
            let template = catalog.update(
                &id,
                TemplateUpdate {
                    title,
                    description,
                    category: category.map(|text| TaskCategory::parse(&text)),
                    difficulty,
                    estimated_minutes: minutes,
                    mood_range: mood_range
                        .map(|text| if text.is_empty() { None } else { Some(text) }),
                    default_labels: labels.map(|l| split_labels(&l)),
                },
            )?;
            println!("Template updated:");
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        TemplateAction::Delete { id } => {
            catalog.delete(&id)?;
            println!("Template deleted: {id}");
        }
    }
    Ok(())
}
