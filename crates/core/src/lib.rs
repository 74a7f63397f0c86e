//! Core types, tables, and validation for the Safari City reporting engine.

pub mod context;
pub mod error;
pub mod limits;
pub mod records;
pub mod schema;

pub use context::{DataContext, EventTable};
pub use error::{Error, LoadErrorCode, Result};
pub use records::*;
