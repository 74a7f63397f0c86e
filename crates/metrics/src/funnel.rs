//! Acquisition funnel over the merged event table.

use serde::{Deserialize, Serialize};

use report_core::DataContext;

/// One funnel stage with conversion percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage_name: String,
    pub count: u64,
    /// 100 * count / largest stage count.
    pub percent_of_first: f64,
    /// 100 * count / immediately preceding stage count; 100 for the first
    /// stage when its count is nonzero.
    pub percent_of_previous: f64,
}

/// Computes the funnel for the given stage names.
///
/// Stages are selected from the merged event table (engagement plus key
/// events, counts summed on name collision) and ordered by descending
/// count, NOT by any declared journey order. Ties keep source order
/// (stable sort). When every selected stage has count 0, all percentages
/// are 0.
pub fn funnel(ctx: &DataContext, stage_names: &[&str]) -> Vec<FunnelStage> {
    let merged = ctx.merged_events();
    let mut selected: Vec<_> = merged
        .rows()
        .iter()
        .filter(|r| stage_names.contains(&r.event_name.as_str()))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.count.cmp(&a.count));

    let first = selected.first().map(|r| r.count).unwrap_or(0);
    let mut stages = Vec::with_capacity(selected.len());
    for (i, row) in selected.iter().enumerate() {
        let percent_of_first = ratio_percent(row.count, first);
        let percent_of_previous = if i == 0 {
            ratio_percent(row.count, first)
        } else {
            ratio_percent(row.count, selected[i - 1].count)
        };
        stages.push(FunnelStage {
            stage_name: row.event_name.clone(),
            count: row.count,
            percent_of_first,
            percent_of_previous,
        });
    }
    stages
}

/// 100 * num / den with a defined 0 fallback for a zero denominator.
fn ratio_percent(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::{EventCount, EventTable};

    fn ctx(engagement: &[(&str, u64)], key_events: &[(&str, u64)]) -> DataContext {
        DataContext {
            engagement: engagement
                .iter()
                .map(|(n, c)| EventCount::new(*n, *c))
                .collect::<EventTable>(),
            key_events: key_events
                .iter()
                .map(|(n, c)| EventCount::new(*n, *c))
                .collect::<EventTable>(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_merge_sum_across_sources() {
        let ctx = ctx(
            &[("first_open", 1000), ("session_start", 150)],
            &[("session_start", 110)],
        );
        let stages = funnel(&ctx, &["first_open", "session_start"]);
        let session = stages
            .iter()
            .find(|s| s.stage_name == "session_start")
            .unwrap();
        assert_eq!(session.count, 260);
    }

    #[test]
    fn stages_sort_descending_and_first_is_100() {
        let ctx = ctx(
            &[("first_open", 1000), ("session_start", 260), ("progress", 90)],
            &[],
        );
        let stages = funnel(&ctx, &["first_open", "session_start", "progress"]);
        assert_eq!(stages.len(), 3);
        assert!(stages.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(stages[0].percent_of_first, 100.0);
        assert_eq!(stages[0].percent_of_previous, 100.0);
        assert_eq!(stages[1].percent_of_first, 26.0);
        assert_eq!(stages[1].percent_of_previous, 26.0);
        assert!((stages[2].percent_of_previous - 100.0 * 90.0 / 260.0).abs() < 1e-9);
    }

    // Ordering is by observed count, not by the intended journey order: a
    // stage later in the journey that outgrew an earlier one comes first.
    #[test]
    fn funnel_orders_by_count_not_journey_order() {
        let ctx = ctx(&[("first_open", 300), ("session_start", 500)], &[]);
        let stages = funnel(&ctx, &["first_open", "session_start"]);
        assert_eq!(stages[0].stage_name, "session_start");
        assert_eq!(stages[1].stage_name, "first_open");
    }

    #[test]
    fn all_zero_counts_report_zero_percentages() {
        let ctx = ctx(&[("first_open", 0), ("session_start", 0)], &[]);
        let stages = funnel(&ctx, &["first_open", "session_start"]);
        assert_eq!(stages.len(), 2);
        for stage in stages {
            assert_eq!(stage.percent_of_first, 0.0);
            assert_eq!(stage.percent_of_previous, 0.0);
        }
    }

    #[test]
    fn unselected_events_stay_out() {
        let ctx = ctx(&[("first_open", 10), ("ad_impression", 999)], &[]);
        let stages = funnel(&ctx, &["first_open"]);
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].stage_name, "first_open");
    }

    #[test]
    fn empty_selection_yields_empty_funnel() {
        let ctx = ctx(&[("first_open", 10)], &[]);
        assert!(funnel(&ctx, &[]).is_empty());
        assert!(funnel(&ctx, &["missing_stage"]).is_empty());
    }
}
