//! Retention and engagement KPI rates.
//!
//! Both rates read the engagement table only; the key-events table feeds
//! the funnel, not the KPIs.

use report_core::DataContext;

/// Journey stage: install / first app open.
pub const FIRST_OPEN: &str = "first_open";
/// Journey stage: session begun.
pub const SESSION_START: &str = "session_start";
/// Journey stage: in-game progress event.
pub const PROGRESS: &str = "progress";

/// Day-1 retention: 100 * session_start / first_open.
///
/// 0.0 when the first_open total is 0; never NaN or infinity.
pub fn retention_rate(ctx: &DataContext) -> f64 {
    percent_of(
        ctx.engagement.total_of(SESSION_START),
        ctx.engagement.total_of(FIRST_OPEN),
    )
}

/// Engagement: 100 * progress / session_start.
///
/// 0.0 when the session_start total is 0.
pub fn engagement_rate(ctx: &DataContext) -> f64 {
    percent_of(
        ctx.engagement.total_of(PROGRESS),
        ctx.engagement.total_of(SESSION_START),
    )
}

fn percent_of(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64 * 100.0
    }
}
