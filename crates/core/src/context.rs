//! The immutable tabular store.
//!
//! All five loaded tables live in one [`DataContext`] value, constructed
//! once by the process entry point and passed by reference into every
//! metric computation. Nothing mutates it after construction.

use crate::records::{CohortRow, CountryCount, DeviceCount, EventCount};

/// An ordered event-count table, unique by event name.
///
/// Row order is the source file order; every operation that breaks ties
/// does so against this order, so it is part of the table's contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    rows: Vec<EventCount>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from rows, summing counts for duplicate event names.
    ///
    /// First occurrence fixes the row position; later duplicates only add
    /// to its count.
    pub fn from_rows(rows: impl IntoIterator<Item = EventCount>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.add(row);
        }
        table
    }

    /// Adds one row, merge-summing on an existing event name.
    pub fn add(&mut self, row: EventCount) {
        match self
            .rows
            .iter_mut()
            .find(|r| r.event_name == row.event_name)
        {
            Some(existing) => existing.count += row.count,
            None => self.rows.push(row),
        }
    }

    /// The merged union of two tables.
    ///
    /// Merge key is the event name; the conflict policy is sum. Rows of
    /// `self` keep their positions; rows unique to `other` follow in
    /// `other`'s order.
    pub fn merged(&self, other: &EventTable) -> EventTable {
        let mut table = self.clone();
        for row in &other.rows {
            table.add(row.clone());
        }
        table
    }

    /// Total count for one event name; 0 if absent.
    pub fn total_of(&self, event_name: &str) -> u64 {
        self.rows
            .iter()
            .find(|r| r.event_name == event_name)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    /// Count for one event name, if present.
    pub fn get(&self, event_name: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|r| r.event_name == event_name)
            .map(|r| r.count)
    }

    pub fn rows(&self) -> &[EventCount] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<EventCount> for EventTable {
    fn from_iter<I: IntoIterator<Item = EventCount>>(iter: I) -> Self {
        Self::from_rows(iter)
    }
}

/// The five loaded snapshot tables.
///
/// Immutable after load; every metric is a pure function of this value, so
/// re-running any computation over the same context yields the same output.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    /// Engagement event counts (`Event name` / `Event count`).
    pub engagement: EventTable,
    /// Category-tagged key-event counts (`Event name` / `Key events`).
    pub key_events: EventTable,
    /// Active users per device model.
    pub devices: Vec<DeviceCount>,
    /// Active users per country.
    pub countries: Vec<CountryCount>,
    /// Weekly cohort retention counts.
    pub cohorts: Vec<CohortRow>,
}

impl DataContext {
    /// The merged event table: engagement plus key events, summed by name.
    ///
    /// Recomputed on demand; the context itself never caches derived data.
    pub fn merged_events(&self) -> EventTable {
        self.engagement.merged(&self.key_events)
    }
}
