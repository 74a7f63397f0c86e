//! Snapshot loading for the Safari City reporting engine.
//!
//! Reads the five pre-aggregated CSV exports from disk into the typed,
//! immutable [`report_core::DataContext`]. Loading happens once at process
//! start; structural problems in the exports are fatal here and nowhere
//! else.

pub mod config;
pub mod csv;
pub mod loader;

pub use config::DatasetConfig;
pub use loader::load_context;
