//! Schema validation for snapshot records.
//!
//! Called by the loader once per decoded row; nothing past the load
//! boundary validates again. All failures are coded DATA_005 errors.

use validator::Validate;

use crate::error::{Error, Result};
use crate::limits::MAX_COHORT_WEEKS;
use crate::records::{CohortRow, CountryCount, DeviceCount, EventCount};

/// Validates an event-count record.
pub fn validate_event(table: &str, line: usize, record: &EventCount) -> Result<()> {
    record
        .validate()
        .map_err(|e| Error::invalid_field(table, line, format!("event_name: {e}")))
}

/// Validates a device-count record.
pub fn validate_device(table: &str, line: usize, record: &DeviceCount) -> Result<()> {
    record
        .validate()
        .map_err(|e| Error::invalid_field(table, line, format!("device_model: {e}")))
}

/// Validates a country-count record.
pub fn validate_country(table: &str, line: usize, record: &CountryCount) -> Result<()> {
    record
        .validate()
        .map_err(|e| Error::invalid_field(table, line, format!("country_code: {e}")))
}

/// Validates a cohort row.
///
/// Cross-field: the row must carry at least a week-0 column and no more
/// than [`MAX_COHORT_WEEKS`] weeks. A zero week-0 value is valid here; the
/// curve computation excludes it rather than the loader.
pub fn validate_cohort(table: &str, line: usize, record: &CohortRow) -> Result<()> {
    record
        .validate()
        .map_err(|e| Error::invalid_field(table, line, format!("weeks: {e}")))?;

    if record.weeks.len() > MAX_COHORT_WEEKS {
        return Err(Error::invalid_field(
            table,
            line,
            format!(
                "cohort carries {} week columns, max {}",
                record.weeks.len(),
                MAX_COHORT_WEEKS
            ),
        ));
    }
    Ok(())
}
