//! End-to-end tests for routing and view assembly.

use integration_tests::fixtures;
use views::{assemble, resolve, ChartData, Route, ViewId};

#[test]
fn every_sidebar_path_resolves_and_assembles() {
    let ctx = fixtures::sample_context();
    for path in ["/", "/funnel", "/engagement", "/devices", "/geography", "/insights"] {
        let Route::Page(view) = resolve(path) else {
            panic!("path {path:?} must resolve to a page");
        };
        let package = assemble(view, &ctx);
        assert_eq!(package.view, view);
        assert!(!package.charts.is_empty());
    }
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(
        resolve("/reports"),
        Route::NotFound {
            path: "/reports".to_string()
        }
    );
}

#[test]
fn packages_serialize_to_sink_shapes() {
    let ctx = fixtures::sample_context();
    let package = assemble(ViewId::Geography, &ctx);
    let json = serde_json::to_value(&package).unwrap();

    assert_eq!(json["view"], "geography");
    for chart in json["charts"].as_array().unwrap() {
        let kind = chart["data"]["kind"].as_str().unwrap();
        match kind {
            "categorical" => {
                let labels = chart["data"]["labels"].as_array().unwrap();
                let values = chart["data"]["values"].as_array().unwrap();
                assert_eq!(labels.len(), values.len());
            }
            "funnel" => assert!(chart["data"]["stages"].is_array()),
            "multi_series" => assert!(chart["data"]["points"].is_array()),
            other => panic!("unexpected chart kind {other}"),
        }
    }
}

#[test]
fn overview_kpis_match_engine_values() {
    let ctx = fixtures::sample_context();
    let package = assemble(ViewId::Overview, &ctx);
    let ChartData::Categorical { labels, values } = &package.charts[0].data else {
        panic!("overview must lead with KPI indicators");
    };
    let retention_idx = labels
        .iter()
        .position(|l| l.starts_with("Day 1 Retention"))
        .unwrap();
    assert_eq!(values[retention_idx], metrics::retention_rate(&ctx));
}

#[test]
fn funnel_view_reflects_merged_counts() {
    let ctx = fixtures::sample_context();
    let package = assemble(ViewId::Funnel, &ctx);
    let ChartData::Funnel { stages } = &package.charts[0].data else {
        panic!("funnel view must lead with funnel data");
    };
    // 150 in engagement + 110 in key events.
    let session = stages
        .iter()
        .find(|s| s.stage_name == "session_start")
        .unwrap();
    assert_eq!(session.count, 260);
    // Stage order is by merged count, not journey order.
    assert!(stages.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn cohort_chart_series_are_keyed_by_cohort_date() {
    let ctx = fixtures::sample_context();
    let package = assemble(ViewId::Engagement, &ctx);
    let cohort_chart = package
        .charts
        .iter()
        .find(|c| c.id == "cohort_retention")
        .unwrap();
    let ChartData::MultiSeries { points } = &cohort_chart.data else {
        panic!("cohort chart must be multi-series");
    };
    // The dead cohort (week 0 == 0) contributes no series.
    assert!(points.iter().all(|p| p.series_key == "2024-01-01"));
}
