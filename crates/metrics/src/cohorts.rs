//! Cohort retention curves normalized to week 0.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use report_core::CohortRow;

/// One point of a cohort retention curve, long-format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortPoint {
    pub cohort: NaiveDate,
    /// Week since acquisition, starting at 1 (week 0 is the implicit 100%).
    pub week: usize,
    pub retention_percent: f64,
}

/// Normalizes every cohort to its week-0 size.
///
/// Emits one point per cohort and week for weeks >= 1. Week 0 itself is
/// not emitted; it is 100% by definition. Rows whose week-0 value is 0 are
/// excluded entirely rather than producing NaN/infinity points. A zero
/// retained count at a later week IS emitted, as 0.0.
pub fn cohort_curve(rows: &[CohortRow]) -> Vec<CohortPoint> {
    let mut points = Vec::new();
    for row in rows {
        if !row.is_normalizable() {
            continue;
        }
        let week0 = row.cohort_size() as f64;
        for (week, &retained) in row.weeks.iter().enumerate().skip(1) {
            points.push(CohortPoint {
                cohort: row.cohort_start,
                week,
                retention_percent: retained as f64 / week0 * 100.0,
            });
        }
    }
    points
}
