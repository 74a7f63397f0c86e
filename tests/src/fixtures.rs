//! Test fixtures and snapshot generators.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use report_core::{CohortRow, CountryCount, DataContext, DeviceCount, EventCount, EventTable};

/// Builds an event table from (name, count) pairs.
pub fn event_table(rows: &[(&str, u64)]) -> EventTable {
    rows.iter()
        .map(|(name, count)| EventCount::new(*name, *count))
        .collect()
}

/// A context holding only an engagement table.
pub fn engagement_context(rows: &[(&str, u64)]) -> DataContext {
    DataContext {
        engagement: event_table(rows),
        ..Default::default()
    }
}

/// A small but fully-populated context mirroring the snapshot exports.
pub fn sample_context() -> DataContext {
    DataContext {
        engagement: event_table(&[
            ("first_open", 1000),
            ("session_start", 150),
            ("progress", 90),
            ("user_engagement", 400),
            ("level_up", 40),
        ]),
        key_events: event_table(&[("session_start", 110), ("level_up", 75)]),
        devices: vec![
            DeviceCount::new("SM-A055F", 1200),
            DeviceCount::new("SM-A155F", 800),
            DeviceCount::new("Redmi 12C", 450),
        ],
        countries: vec![
            CountryCount::new("KE", 500),
            CountryCount::new("NG", 300),
            CountryCount::new("XX", 50),
        ],
        cohorts: vec![
            CohortRow::new(date(2024, 1, 1), vec![200, 150, 0]),
            CohortRow::new(date(2024, 1, 8), vec![0, 10, 20]),
        ],
    }
}

/// Writes the five snapshot CSVs (matching [`sample_context`]) into `dir`.
pub fn write_snapshot_dir(dir: &Path) {
    fs::write(
        dir.join("engagement_time.csv"),
        "Event name,Event count\n\
         first_open,1000\n\
         session_start,150\n\
         progress,90\n\
         user_engagement,400\n\
         level_up,40\n",
    )
    .unwrap();
    fs::write(
        dir.join("events.csv"),
        "Event name,Key events\n\
         session_start,110\n\
         ad_click,\n\
         level_up,75\n",
    )
    .unwrap();
    fs::write(
        dir.join("device_distribution.csv"),
        "Device model,Active users\n\
         SM-A055F,\"1,200\"\n\
         SM-A155F,800\n\
         Redmi 12C,450\n",
    )
    .unwrap();
    fs::write(
        dir.join("country_distribution.csv"),
        "Country,Active users\n\
         KE,500\n\
         NG,300\n\
         XX,50\n",
    )
    .unwrap();
    fs::write(
        dir.join("consistency.csv"),
        "Date,Week 0,Week 1,Week 2\n\
         2024-01-01,200,150,0\n\
         2024-01-08,0,10,20\n",
    )
    .unwrap();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
