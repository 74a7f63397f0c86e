//! Minimal CSV reading for the flat snapshot exports.
//!
//! The exports are small, headered, comma-separated files with optional
//! double-quoted fields (quotes escape embedded commas; doubled quotes
//! escape a literal quote). Structural problems are fatal DATA errors;
//! this module never guesses at malformed input.

use std::path::Path;

use report_core::{Error, Result};

/// A parsed snapshot file: header row plus data rows, in file order.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Table name used in error messages (e.g. "engagement").
    pub table: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a required column; DATA_001 if absent.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::missing_column(&self.table, name))
    }

    /// Data rows paired with their 1-based file line numbers.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (usize, &Vec<String>)> {
        // Line 1 is the header.
        self.rows.iter().enumerate().map(|(i, row)| (i + 2, row))
    }
}

/// Reads and parses one snapshot file.
///
/// Every data row must have exactly as many cells as the header; a ragged
/// row is a DATA_003 error, not a recoverable condition.
pub fn read_table(path: &Path, table: &str) -> Result<CsvTable> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::unreadable(&path.display().to_string(), &e))?;

    let mut lines = raw
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| Error::invalid_field(table, 1, "snapshot file has no header row"))?;
    let headers = split_line(header_line.trim_start_matches('\u{feff}'));

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let cells = split_line(line);
        if cells.len() != headers.len() {
            return Err(Error::malformed_row(table, i + 2, headers.len(), cells.len()));
        }
        rows.push(cells);
    }

    Ok(CsvTable {
        table: table.to_string(),
        headers,
        rows,
    })
}

/// Splits one CSV line into cells, honoring double-quoted fields.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field.
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut cell));
            }
            _ => cell.push(c),
        }
    }
    cells.push(cell);
    cells
}
