//! CLI subcommand implementations.

pub mod config;
pub mod journal;
pub mod label;
pub mod mood;
pub mod suggest;
pub mod task;
pub mod template;

use moodo_core::{Database, LabelStore, TemplateCatalog};

/// Open the database and make sure the built-in seeds exist.
pub fn open_db() -> Result<Database, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    TemplateCatalog::new(&db).seed_builtins()?;
    LabelStore::new(&db).seed_builtins()?;
    Ok(db)
}
