//! Unified error types for the reporting engine.
//!
//! Only the load boundary produces errors; the metric layer resolves every
//! degenerate case to a defined fallback instead. Error codes:
//! - DATA_001: required column missing
//! - DATA_002: non-numeric count value
//! - DATA_003: malformed row
//! - DATA_004: unreadable snapshot file
//! - DATA_005: invalid field value

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Load-time error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorCode {
    /// DATA_001: A required column is missing from a snapshot header.
    MissingColumn,
    /// DATA_002: A count cell could not be parsed as a non-negative integer.
    NonNumeric,
    /// DATA_003: A row has the wrong number of cells.
    MalformedRow,
    /// DATA_004: A snapshot file could not be read.
    Unreadable,
    /// DATA_005: A field value violates its schema (empty, too long, bad date).
    InvalidField,
}

impl LoadErrorCode {
    /// Get the error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingColumn => "DATA_001",
            Self::NonNumeric => "DATA_002",
            Self::MalformedRow => "DATA_003",
            Self::Unreadable => "DATA_004",
            Self::InvalidField => "DATA_005",
        }
    }
}

/// Unified error type for the reporting engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Data contract violation at the load boundary, with a stable code.
    #[error("[{code}] {message}")]
    Load { code: &'static str, message: String },

    /// Record-level validation failure outside the coded set.
    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a coded load error.
    pub fn load(code: LoadErrorCode, msg: impl Into<String>) -> Self {
        Self::Load {
            code: code.code(),
            message: msg.into(),
        }
    }

    /// DATA_001 for a named table/column pair.
    pub fn missing_column(table: &str, column: &str) -> Self {
        Self::load(
            LoadErrorCode::MissingColumn,
            format!("{table}: required column '{column}' not found"),
        )
    }

    /// DATA_002 for a cell that failed integer parsing.
    pub fn non_numeric(table: &str, column: &str, line: usize, raw: &str) -> Self {
        Self::load(
            LoadErrorCode::NonNumeric,
            format!("{table} line {line}: column '{column}' has non-numeric value '{raw}'"),
        )
    }

    /// DATA_003 for a row with the wrong cell count.
    pub fn malformed_row(table: &str, line: usize, expected: usize, got: usize) -> Self {
        Self::load(
            LoadErrorCode::MalformedRow,
            format!("{table} line {line}: expected {expected} cells, got {got}"),
        )
    }

    /// DATA_004 for an unreadable snapshot file.
    pub fn unreadable(path: &str, err: &std::io::Error) -> Self {
        Self::load(
            LoadErrorCode::Unreadable,
            format!("cannot read snapshot '{path}': {err}"),
        )
    }

    /// DATA_005 for a field that violates its schema.
    pub fn invalid_field(table: &str, line: usize, detail: impl Into<String>) -> Self {
        Self::load(
            LoadErrorCode::InvalidField,
            format!("{table} line {line}: {}", detail.into()),
        )
    }

    /// Create a plain validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns the stable error code, if this error carries one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Load { code, .. } => Some(code),
            Self::Validation(_) => None,
        }
    }
}
