use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "moodo-cli", version, about = "Moodo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mood logging
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Task template catalog
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Mood-aware task suggestions
    Suggest {
        #[command(subcommand)]
        action: commands::suggest::SuggestAction,
    },
    /// Label management
    Label {
        #[command(subcommand)]
        action: commands::label::LabelAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Template { action } => commands::template::run(action),
        Commands::Suggest { action } => commands::suggest::run(action),
        Commands::Label { action } => commands::label::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
