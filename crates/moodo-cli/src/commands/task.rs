//! Task management commands for CLI.

use chrono::{Duration, Utc};
use clap::Subcommand;
use moodo_core::template::split_labels;
use moodo_core::{Task, TaskCategory};

use super::open_db;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Category (cleaning, exercise, creative, admin, self-care, social,
        /// learning, work, household)
        #[arg(long)]
        category: Option<String>,
        /// Difficulty 1-5 (default: 1)
        #[arg(long, default_value = "1")]
        difficulty: u8,
        /// Estimated duration in minutes
        #[arg(long, default_value = "0")]
        minutes: u32,
        /// Comma-separated labels
        #[arg(long)]
        labels: Option<String>,
        /// Days until due
        #[arg(long)]
        due_in_days: Option<i64>,
    },
    /// List tasks, newest first
    List {
        /// Only show unfinished tasks
        #[arg(long)]
        pending: bool,
    },
    /// Mark a task as completed
    Complete {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_db()?;

    match action {
        TaskAction::Add {
            title,
            description,
            category,
            difficulty,
            minutes,
            labels,
            due_in_days,
        } => {
            let mut task = Task::new(title);
            task.description = description;
            task.category = category.as_deref().and_then(TaskCategory::parse);
            task.difficulty = difficulty;
            task.estimated_minutes = minutes;
            task.labels = labels.map(|l| split_labels(&l)).unwrap_or_default();
            task.due_at = due_in_days.map(|days| Utc::now() + Duration::days(days));
            db.insert_task(&task)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { pending } => {
            let tasks: Vec<Task> = db
                .list_tasks()?
                .into_iter()
                .filter(|t| !pending || !t.completed)
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Complete { id } => {
            let mut task = db.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            task.completed = true;
            db.update_task(&task)?;
            println!("Task completed: {}", task.title);
        }
        TaskAction::Delete { id } => {
            if db.delete_task(&id)? {
                println!("Task deleted: {id}");
            } else {
                return Err(format!("Task not found: {id}").into());
            }
        }
    }
    Ok(())
}
