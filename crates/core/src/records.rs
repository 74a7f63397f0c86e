//! Typed records for the five snapshot exports.
//!
//! Each record mirrors one row of a pre-aggregated CSV export. Counts are
//! `u64` by construction, so non-negativity is a type-level guarantee and
//! the metric layer never re-checks it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One event with its occurrence count.
///
/// Present in two exports: the engagement table (`Event name` /
/// `Event count`) and the category-tagged key-events table (`Event name` /
/// `Key events`). The same event name may appear in both; tables are
/// merge-summed, never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EventCount {
    #[validate(length(min = 1, max = 128))]
    pub event_name: String,
    pub count: u64,
}

impl EventCount {
    pub fn new(event_name: impl Into<String>, count: u64) -> Self {
        Self {
            event_name: event_name.into(),
            count,
        }
    }
}

/// Active users per device model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DeviceCount {
    #[validate(length(min = 1, max = 128))]
    pub device_model: String,
    pub active_users: u64,
}

impl DeviceCount {
    pub fn new(device_model: impl Into<String>, active_users: u64) -> Self {
        Self {
            device_model: device_model.into(),
            active_users,
        }
    }
}

/// Active users per country.
///
/// `country_code` is an ISO-2 code for known markets but may be any raw
/// label the export produced (e.g. "(not set)"). Display names and regions
/// are derived by enrichment at computation time, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CountryCount {
    #[validate(length(min = 1, max = 64))]
    pub country_code: String,
    pub active_users: u64,
}

impl CountryCount {
    pub fn new(country_code: impl Into<String>, active_users: u64) -> Self {
        Self {
            country_code: country_code.into(),
            active_users,
        }
    }
}

/// Weekly retention counts for one acquisition cohort.
///
/// `weeks[k]` is the retained user count at week k since acquisition;
/// `weeks[0]` is the starting cohort size. Rows with a zero week-0 value
/// cannot be normalized and are excluded from curve output rather than
/// divided by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CohortRow {
    pub cohort_start: NaiveDate,
    #[validate(length(min = 1))]
    pub weeks: Vec<u64>,
}

impl CohortRow {
    pub fn new(cohort_start: NaiveDate, weeks: Vec<u64>) -> Self {
        Self {
            cohort_start,
            weeks,
        }
    }

    /// Starting cohort size (week-0 value).
    pub fn cohort_size(&self) -> u64 {
        self.weeks.first().copied().unwrap_or(0)
    }

    /// Whether this row can be normalized to week 0.
    pub fn is_normalizable(&self) -> bool {
        self.cohort_size() > 0
    }
}
