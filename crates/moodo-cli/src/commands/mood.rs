//! Mood logging commands for CLI.

use clap::Subcommand;
use moodo_core::MoodLog;

use super::open_db;

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log the current mood (1-10)
    Log {
        /// Mood value, 1 = worst, 10 = best
        value: u8,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// List logged moods, newest first
    List,
    /// Show or override the label for a mood value
    Label {
        /// Mood value 1-10
        value: u8,
        /// New label text
        #[arg(long)]
        set: Option<String>,
        /// New emoji (used together with --set)
        #[arg(long)]
        emoji: Option<String>,
    },
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = open_db()?;
    let log = MoodLog::new(&db);

    match action {
        MoodAction::Log { value, tags } => {
            let tags = tags
                .map(|t| moodo_core::template::split_labels(&t))
                .unwrap_or_default();
            let entry = log.log(value, tags)?;
            println!(
                "Logged mood {} ({} {})",
                entry.value,
                log.emoji_for(entry.value),
                log.label_for(entry.value)
            );
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        MoodAction::List => {
            let entries = log.list()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        MoodAction::Label { value, set, emoji } => match set {
            Some(label) => {
                let emoji = emoji.unwrap_or_else(|| moodo_core::mood::default_emoji(value).to_string());
                log.set_label(value, &label, &emoji)?;
                println!("Mood {value} is now {} {label}", emoji);
            }
            None => {
                println!("{} {} {}", value, log.emoji_for(value), log.label_for(value));
            }
        },
    }
    Ok(())
}
