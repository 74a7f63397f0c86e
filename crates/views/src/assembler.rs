//! The View Assembler.
//!
//! Maps each view to a fixed list of Metric Engine calls and packages the
//! results into sink shapes. No computation happens here beyond selecting
//! metrics and reshaping their output.

use report_core::DataContext;

use metrics::{
    canonical_categories, category_rollup, cohort_curve, continent_of, display_name_of,
    engagement_rate, funnel, regional_rollup, retention_rate, top_n, FIRST_OPEN, PROGRESS,
    SESSION_START,
};

use crate::package::{Chart, SeriesPoint, ViewPackage};
use crate::route::ViewId;

/// Assembles the render package for one view.
///
/// Total over the closed view set; recomputes everything from the context
/// on each call.
pub fn assemble(view: ViewId, ctx: &DataContext) -> ViewPackage {
    let charts = match view {
        ViewId::Overview => vec![
            kpi_indicators(ctx),
            category_comparison(ctx),
            acquisition_funnel(ctx),
        ],
        ViewId::Funnel => vec![acquisition_funnel(ctx), kpi_indicators(ctx)],
        ViewId::Engagement => vec![
            top_events(ctx),
            category_comparison(ctx),
            cohort_retention(ctx),
        ],
        ViewId::Devices => vec![
            device_distribution(ctx),
            device_share(ctx),
            device_performance(ctx),
        ],
        ViewId::Geography => vec![
            country_users(ctx),
            top_countries(ctx),
            continent_distribution(ctx),
            regional_share(ctx),
        ],
        ViewId::Insights => vec![headline_kpis(ctx)],
    };

    ViewPackage {
        view,
        title: view.title(),
        charts,
    }
}

/// Stage names for the acquisition funnel: the journey stages plus every
/// tagged key event (the key-events export is part of the funnel frame).
fn funnel_stage_names(ctx: &DataContext) -> Vec<&str> {
    let mut names = vec![FIRST_OPEN, SESSION_START];
    for row in ctx.key_events.rows() {
        if !names.contains(&row.event_name.as_str()) {
            names.push(&row.event_name);
        }
    }
    names
}

fn acquisition_funnel(ctx: &DataContext) -> Chart {
    let stages = funnel(ctx, &funnel_stage_names(ctx));
    Chart::funnel("acquisition_funnel", "Player Acquisition Funnel", stages)
}

fn kpi_indicators(ctx: &DataContext) -> Chart {
    let labels = vec![
        "Day 1 Retention Rate (%)".to_string(),
        "Engagement Rate (%)".to_string(),
        "Total Installs".to_string(),
        "Session Starts".to_string(),
        "Progress Events".to_string(),
    ];
    let values = vec![
        retention_rate(ctx),
        engagement_rate(ctx),
        ctx.engagement.total_of(FIRST_OPEN) as f64,
        ctx.engagement.total_of(SESSION_START) as f64,
        ctx.engagement.total_of(PROGRESS) as f64,
    ];
    Chart::categorical("kpi_indicators", "Key Performance Indicators", labels, values)
}

fn category_comparison(ctx: &DataContext) -> Chart {
    let rollup = category_rollup(ctx, &canonical_categories());
    let (labels, values) = rollup
        .into_iter()
        .map(|(name, count)| (name, count as f64))
        .unzip();
    Chart::categorical(
        "category_comparison",
        "Event Categories Comparison",
        labels,
        values,
    )
}

fn top_events(ctx: &DataContext) -> Chart {
    let top = top_n(ctx.engagement.rows(), 15, |e| e.count);
    let labels = top.iter().map(|e| e.event_name.clone()).collect();
    let values = top.iter().map(|e| e.count as f64).collect();
    Chart::categorical("top_events", "Top 15 Engagement Events", labels, values)
}

fn device_distribution(ctx: &DataContext) -> Chart {
    let top = top_n(&ctx.devices, 15, |d| d.active_users);
    let labels = top.iter().map(|d| d.device_model.clone()).collect();
    let values = top.iter().map(|d| d.active_users as f64).collect();
    Chart::categorical("device_distribution", "Device Distribution", labels, values)
}

fn device_share(ctx: &DataContext) -> Chart {
    let top = top_n(&ctx.devices, 15, |d| d.active_users);
    let labels = top.iter().map(|d| d.device_model.clone()).collect();
    let values = top.iter().map(|d| d.active_users as f64).collect();
    Chart::categorical("device_share", "Market Share", labels, values)
}

fn device_performance(ctx: &DataContext) -> Chart {
    let top = top_n(&ctx.devices, 20, |d| d.active_users);
    let labels = top.iter().map(|d| d.device_model.clone()).collect();
    let values = top.iter().map(|d| d.active_users as f64).collect();
    Chart::categorical(
        "device_performance",
        "Device Performance Distribution",
        labels,
        values,
    )
}

fn country_users(ctx: &DataContext) -> Chart {
    // All countries, largest first, labeled by display name.
    let sorted = top_n(&ctx.countries, ctx.countries.len(), |c| c.active_users);
    let labels = sorted
        .iter()
        .map(|c| display_name_of(&c.country_code))
        .collect();
    let values = sorted.iter().map(|c| c.active_users as f64).collect();
    Chart::categorical("country_users", "Active Users by Country", labels, values)
}

fn top_countries(ctx: &DataContext) -> Chart {
    let top = top_n(&ctx.countries, 5, |c| c.active_users);
    let labels = top
        .iter()
        .map(|c| display_name_of(&c.country_code))
        .collect();
    let values = top.iter().map(|c| c.active_users as f64).collect();
    Chart::categorical("top_countries", "Top 5 Countries", labels, values)
}

fn continent_distribution(ctx: &DataContext) -> Chart {
    let mut groups: Vec<(&'static str, u64)> = Vec::new();
    for country in &ctx.countries {
        let continent = continent_of(&country.country_code);
        match groups.iter_mut().find(|(c, _)| *c == continent) {
            Some((_, total)) => *total += country.active_users,
            None => groups.push((continent, country.active_users)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let labels = groups.iter().map(|(c, _)| c.to_string()).collect();
    let values = groups.iter().map(|(_, t)| *t as f64).collect();
    Chart::categorical(
        "continent_distribution",
        "Continent Distribution",
        labels,
        values,
    )
}

fn regional_share(ctx: &DataContext) -> Chart {
    let rollup = regional_rollup(&ctx.countries);
    let labels = rollup.iter().map(|r| r.region.label().to_string()).collect();
    let values = rollup.iter().map(|r| r.percentage_of_total).collect();
    Chart::categorical("regional_share", "User Concentration %", labels, values)
}

fn cohort_retention(ctx: &DataContext) -> Chart {
    let points = cohort_curve(&ctx.cohorts)
        .into_iter()
        .map(|p| SeriesPoint {
            series_key: p.cohort.to_string(),
            x: format!("Week {}", p.week),
            y: p.retention_percent,
        })
        .collect();
    Chart::multi_series("cohort_retention", "Retention Cohorts by Week", points)
}

fn headline_kpis(ctx: &DataContext) -> Chart {
    let leading_region_share = regional_rollup(&ctx.countries)
        .first()
        .map(|r| r.percentage_of_total)
        .unwrap_or(0.0);
    let labels = vec![
        "Day 1 Retention Rate (%)".to_string(),
        "Engagement Rate (%)".to_string(),
        "Leading Region Share (%)".to_string(),
    ];
    let values = vec![
        retention_rate(ctx),
        engagement_rate(ctx),
        leading_region_share,
    ];
    Chart::categorical("headline_kpis", "Headline KPIs", labels, values)
}
