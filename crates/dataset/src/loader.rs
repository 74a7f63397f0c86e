//! Typed per-table loaders.
//!
//! Everything fallible about the snapshots happens here, once, at process
//! start. Past this boundary the tables are valid by construction and the
//! metric layer never re-checks them.

use std::path::Path;

use tracing::{debug, info, warn};

use report_core::{
    schema, CohortRow, CountryCount, DataContext, DeviceCount, Error, EventCount, EventTable,
    Result,
};

use crate::config::DatasetConfig;
use crate::csv::{read_table, CsvTable};

/// Loads all five snapshot tables into an immutable context.
pub fn load_context(config: &DatasetConfig) -> Result<DataContext> {
    let engagement = load_engagement(&config.engagement_path())?;
    let key_events = load_key_events(&config.events_path())?;
    let devices = load_devices(&config.devices_path())?;
    let countries = load_countries(&config.countries_path())?;
    let cohorts = load_cohorts(&config.consistency_path())?;

    info!(
        engagement_events = engagement.len(),
        key_events = key_events.len(),
        devices = devices.len(),
        countries = countries.len(),
        cohorts = cohorts.len(),
        "Snapshot tables loaded"
    );

    Ok(DataContext {
        engagement,
        key_events,
        devices,
        countries,
        cohorts,
    })
}

/// Engagement event counts (`Event name` / `Event count`).
pub fn load_engagement(path: &Path) -> Result<EventTable> {
    let table = read_table(path, "engagement")?;
    let name_col = table.column("Event name")?;
    let count_col = table.column("Event count")?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for (line, cells) in table.numbered_rows() {
        let record = EventCount::new(
            cells[name_col].trim(),
            parse_count(&table, "Event count", line, &cells[count_col])?,
        );
        schema::validate_event(&table.table, line, &record)?;
        rows.push(record);
    }
    Ok(EventTable::from_rows(rows))
}

/// Category-tagged key events (`Event name` / `Key events`).
///
/// Rows with an empty key-event cell are dropped before merging; the
/// export marks untagged events that way and they carry no count.
pub fn load_key_events(path: &Path) -> Result<EventTable> {
    let table = read_table(path, "key_events")?;
    let name_col = table.column("Event name")?;
    let count_col = table.column("Key events")?;

    let mut rows = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;
    for (line, cells) in table.numbered_rows() {
        if cells[count_col].trim().is_empty() {
            debug!(line, "key_events: dropping row with empty key-event cell");
            dropped += 1;
            continue;
        }
        let record = EventCount::new(
            cells[name_col].trim(),
            parse_count(&table, "Key events", line, &cells[count_col])?,
        );
        schema::validate_event(&table.table, line, &record)?;
        rows.push(record);
    }
    if dropped > 0 {
        warn!(dropped, "key_events: dropped rows with no key-event value");
    }
    Ok(EventTable::from_rows(rows))
}

/// Device distribution (`Device model` / `Active users`).
pub fn load_devices(path: &Path) -> Result<Vec<DeviceCount>> {
    let table = read_table(path, "devices")?;
    let model_col = table.column("Device model")?;
    let users_col = table.column("Active users")?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for (line, cells) in table.numbered_rows() {
        let record = DeviceCount::new(
            cells[model_col].trim(),
            parse_count(&table, "Active users", line, &cells[users_col])?,
        );
        schema::validate_device(&table.table, line, &record)?;
        rows.push(record);
    }
    Ok(rows)
}

/// Country distribution (`Country` / `Active users`).
pub fn load_countries(path: &Path) -> Result<Vec<CountryCount>> {
    let table = read_table(path, "countries")?;
    let country_col = table.column("Country")?;
    let users_col = table.column("Active users")?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for (line, cells) in table.numbered_rows() {
        let record = CountryCount::new(
            cells[country_col].trim(),
            parse_count(&table, "Active users", line, &cells[users_col])?,
        );
        schema::validate_country(&table.table, line, &record)?;
        rows.push(record);
    }
    Ok(rows)
}

/// Weekly cohort retention (`Date` plus one column per week, in order).
pub fn load_cohorts(path: &Path) -> Result<Vec<CohortRow>> {
    let table = read_table(path, "consistency")?;
    let date_col = table.column("Date")?;

    // Every non-Date column is a week, file order = week order.
    let week_cols: Vec<(usize, &String)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != date_col)
        .collect();
    if week_cols.is_empty() {
        return Err(Error::missing_column(&table.table, "Week 0"));
    }

    let mut rows = Vec::with_capacity(table.rows.len());
    for (line, cells) in table.numbered_rows() {
        let raw_date = cells[date_col].trim();
        let cohort_start = raw_date.parse().map_err(|_| {
            Error::invalid_field(
                &table.table,
                line,
                format!("'{raw_date}' is not a valid cohort date"),
            )
        })?;

        let mut weeks = Vec::with_capacity(week_cols.len());
        for (col, header) in &week_cols {
            weeks.push(parse_count(&table, header, line, &cells[*col])?);
        }

        let record = CohortRow::new(cohort_start, weeks);
        schema::validate_cohort(&table.table, line, &record)?;
        rows.push(record);
    }
    Ok(rows)
}

/// Parses a count cell as a non-negative integer.
///
/// Thousands separators are tolerated ("1,234" arrives as one quoted
/// cell); anything else non-numeric is a fatal DATA_002.
fn parse_count(table: &CsvTable, column: &str, line: usize, raw: &str) -> Result<u64> {
    let cleaned = raw.trim().replace(',', "");
    cleaned
        .parse::<u64>()
        .map_err(|_| Error::non_numeric(&table.table, column, line, raw.trim()))
}
