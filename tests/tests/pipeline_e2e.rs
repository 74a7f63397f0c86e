//! End-to-end tests over the loader-to-metric pipeline.
//!
//! Each test drives the real CSV loader against a generated snapshot
//! directory, then checks the derived metrics against hand-computed
//! values.

use dataset::DatasetConfig;
use integration_tests::fixtures;
use metrics::{
    cohort_curve, engagement_rate, funnel, regional_rollup, retention_rate, Subregion,
};

fn loaded_context() -> report_core::DataContext {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_snapshot_dir(dir.path());
    dataset::load_context(&DatasetConfig::in_dir(dir.path().to_str().unwrap())).unwrap()
}

#[test]
fn retention_rate_from_loaded_snapshot() {
    let ctx = loaded_context();
    // session_start 150 + progress 90 live in engagement; first_open 1000.
    assert_eq!(retention_rate(&ctx), 15.0);
    assert_eq!(engagement_rate(&ctx), 60.0);
}

#[test]
fn retention_rate_example_values() {
    let ctx = fixtures::engagement_context(&[("first_open", 1000), ("session_start", 260)]);
    assert_eq!(retention_rate(&ctx), 26.0);
}

#[test]
fn funnel_merges_session_start_across_sources() {
    let ctx = loaded_context();
    // engagement has session_start=150, key events add 110.
    let stages = funnel(&ctx, &["first_open", "session_start"]);
    let session = stages
        .iter()
        .find(|s| s.stage_name == "session_start")
        .unwrap();
    assert_eq!(session.count, 260);
}

#[test]
fn funnel_is_sorted_descending_with_first_at_100() {
    let ctx = loaded_context();
    let stages = funnel(&ctx, &["first_open", "session_start", "level_up"]);
    assert!(stages.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(stages[0].percent_of_first, 100.0);
    for stage in &stages {
        assert!(stage.percent_of_first.is_finite());
        assert!(stage.percent_of_previous.is_finite());
    }
}

#[test]
fn regional_rollup_keeps_unknown_bucket() {
    let ctx = loaded_context();
    let rollup = regional_rollup(&ctx.countries);

    let unknown = rollup
        .iter()
        .find(|r| r.region == Subregion::Unknown)
        .expect("unmapped countries must roll up into Unknown");
    assert_eq!(unknown.total_active_users, 50);
    assert!((unknown.percentage_of_total - 50.0 / 850.0 * 100.0).abs() < 1e-9);

    let sum: f64 = rollup.iter().map(|r| r.percentage_of_total).sum();
    assert!((sum - 100.0).abs() < 1e-6);
}

#[test]
fn cohort_curve_excludes_dead_cohorts() {
    let ctx = loaded_context();
    let points = cohort_curve(&ctx.cohorts);

    // 2024-01-08 has a zero week 0 and must be absent entirely.
    assert!(points
        .iter()
        .all(|p| p.cohort.to_string() == "2024-01-01"));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].retention_percent, 75.0);
    assert_eq!(points[1].retention_percent, 0.0);
}

#[test]
fn key_event_rows_without_values_are_dropped_at_load() {
    let ctx = loaded_context();
    // events.csv carries an ad_click row with an empty key-event cell.
    assert_eq!(ctx.key_events.get("ad_click"), None);
    assert_eq!(ctx.key_events.len(), 2);
}

#[test]
fn recomputation_is_deterministic() {
    let ctx = loaded_context();
    let first = funnel(&ctx, &["first_open", "session_start"]);
    let second = funnel(&ctx, &["first_open", "session_start"]);
    assert_eq!(first, second);
    assert_eq!(regional_rollup(&ctx.countries), regional_rollup(&ctx.countries));
}
