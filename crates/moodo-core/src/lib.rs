//! # Moodo Core Library
//!
//! This library provides the core business logic for Moodo, a personal
//! mood-and-task companion. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Suggestion Engine**: filters the template catalog by mood-range
//!   membership, scores candidates with a weighted blend of heuristics,
//!   and returns a ranked, truncated list
//! - **Template Catalog**: built-in and user task templates with seeding
//!   and validation
//! - **Storage**: SQLite-based record storage and TOML-based configuration
//! - **Mood / Journal / Labels**: the surrounding personal log features
//!
//! ## Key Components
//!
//! - [`SuggestionEngine`]: ranked suggestions plus history tracking
//! - [`TemplateCatalog`]: template seeding and CRUD
//! - [`Database`]: record persistence
//! - [`Config`]: application configuration

pub mod error;
pub mod journal;
pub mod label;
pub mod mood;
pub mod storage;
pub mod suggest;
pub mod task;
pub mod template;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use journal::{Journal, JournalEntry};
pub use label::{LabelStore, TaskLabel};
pub use mood::{MoodEntry, MoodLabelOverride, MoodLog};
pub use storage::{Config, Database};
pub use suggest::{
    EnergyTier, ScoredSuggestion, SuggestionEngine, SuggestionRecord, TimeOfDay,
};
pub use task::Task;
pub use template::{
    MoodRange, NewTemplate, TaskCategory, TaskTemplate, TemplateCatalog, TemplateUpdate,
};
