//! Structured logging for the Safari City reporting engine.

pub mod tracing_setup;

pub use tracing_setup::*;
