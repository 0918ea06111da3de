//! Mood-aware suggestion commands for CLI.

use clap::Subcommand;
use moodo_core::{Config, MoodLog, SuggestionEngine, TaskTemplate, TimeOfDay};
use serde::Serialize;

use super::open_db;

#[derive(Subcommand)]
pub enum SuggestAction {
    /// Surface ranked task suggestions for the current mood
    Next {
        /// Mood value 1-10; defaults to the most recently logged mood
        #[arg(long)]
        mood: Option<u8>,
        /// Maximum number of suggestions; defaults to the configured value
        #[arg(long)]
        max: Option<usize>,
        /// Time-of-day bucket (morning, afternoon, evening, night);
        /// defaults to the current local time
        #[arg(long)]
        time_of_day: Option<String>,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Accept a surfaced suggestion and create its task
    Accept {
        /// Suggestion ID printed by `suggest next`
        suggestion_id: String,
    },
    /// Show suggestion history, newest first
    History {
        /// Filter by template ID
        #[arg(long)]
        template_id: Option<String>,
    },
}

/// A suggestion as surfaced to the user, with the history row id that
/// `suggest accept` expects back.
#[derive(Serialize)]
struct SurfacedSuggestion {
    suggestion_id: String,
    score: f64,
    template: TaskTemplate,
}

pub fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_db()?;
    let engine = SuggestionEngine::new(&db);

    match action {
        SuggestAction::Next {
            mood,
            max,
            time_of_day,
            json,
        } => {
            let mood_log = MoodLog::new(&db);
            let mood_value = match mood {
                Some(value) => value,
                None => mood_log
                    .latest()?
                    .map(|entry| entry.value)
                    .ok_or("no mood logged yet; pass --mood or run `moodo-cli mood log <1-10>`")?,
            };
            let time_of_day = match time_of_day {
                Some(text) => TimeOfDay::parse(&text),
                None => TimeOfDay::current(),
            };
            let max = match max {
                Some(value) => value,
                None => Config::load()?.suggestions.max_suggestions,
            };

            let ranked = engine.suggest_tasks(mood_value, time_of_day, max);
            let mut surfaced = Vec::with_capacity(ranked.len());
            for suggestion in ranked {
                let record =
                    engine.record_suggestion(&suggestion.template, mood_value, time_of_day)?;
                surfaced.push(SurfacedSuggestion {
                    suggestion_id: record.id,
                    score: suggestion.score,
                    template: suggestion.template,
                });
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&surfaced)?);
            } else {
                println!(
                    "Mood {} ({}), {} — {} suggestion(s):",
                    mood_value,
                    mood_log.label_for(mood_value),
                    time_of_day,
                    surfaced.len()
                );
                for (index, s) in surfaced.iter().enumerate() {
                    let category = s
                        .template
                        .category
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{}. {} [{}] difficulty {} ~{} min  score {:.3}",
                        index + 1,
                        s.template.title,
                        category,
                        s.template.difficulty,
                        s.template.estimated_minutes,
                        s.score
                    );
                    println!("   accept with: moodo-cli suggest accept {}", s.suggestion_id);
                }
            }
        }
        SuggestAction::Accept { suggestion_id } => {
            let record = engine
                .record_acceptance(&suggestion_id)?
                .ok_or(format!("Suggestion not found: {suggestion_id}"))?;
            match db.get_template(&record.template_id)? {
                Some(template) => {
                    let task = engine.create_task(&template);
                    db.insert_task(&task)?;
                    println!("Accepted: {}", template.title);
                    println!("Task created: {}", task.id);
                    println!("{}", serde_json::to_string_pretty(&task)?);
                }
                None => {
                    // The template was deleted after the suggestion was
                    // surfaced; the acceptance still counts for history.
                    println!(
                        "Acceptance recorded, but template {} no longer exists",
                        record.template_id
                    );
                }
            }
        }
        SuggestAction::History { template_id } => {
            let history = match template_id {
                Some(id) => db.suggestions_for_template(&id)?,
                None => db.list_suggestions()?,
            };
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }
    Ok(())
}
