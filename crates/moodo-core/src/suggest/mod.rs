//! Mood-aware task suggestion engine.
//!
//! Filters the template catalog down to templates whose mood range covers
//! the current mood, scores the survivors with a weighted blend of four
//! heuristics, and returns the top N. Pure scoring lives in [`scoring`];
//! [`engine::SuggestionEngine`] wires it to the store.

pub mod context;
pub mod engine;
pub mod scoring;

pub use context::{EnergyTier, TimeOfDay};
pub use engine::{ScoredSuggestion, SuggestionEngine, SuggestionRecord};
