//! Render-ready package shapes.
//!
//! The sink consumes exactly three data shapes; everything visual (color,
//! layout, markup) is the sink's concern and never appears here.

use serde::Serialize;

use metrics::FunnelStage;

use crate::route::ViewId;

/// One point of a multi-series line chart, long-format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub series_key: String,
    pub x: String,
    pub y: f64,
}

/// Chart data in one of the three sink shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    /// Label/value pairs (bar, pie, KPI tiles).
    Categorical {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    /// Funnel stages with conversion percentages.
    Funnel { stages: Vec<FunnelStage> },
    /// Long-format line data, one series per key.
    MultiSeries { points: Vec<SeriesPoint> },
}

/// One chart of a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: &'static str,
    pub title: &'static str,
    pub data: ChartData,
}

impl Chart {
    pub fn categorical(
        id: &'static str,
        title: &'static str,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id,
            title,
            data: ChartData::Categorical { labels, values },
        }
    }

    pub fn funnel(id: &'static str, title: &'static str, stages: Vec<FunnelStage>) -> Self {
        Self {
            id,
            title,
            data: ChartData::Funnel { stages },
        }
    }

    pub fn multi_series(
        id: &'static str,
        title: &'static str,
        points: Vec<SeriesPoint>,
    ) -> Self {
        Self {
            id,
            title,
            data: ChartData::MultiSeries { points },
        }
    }
}

/// Everything the sink needs to draw one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPackage {
    pub view: ViewId,
    pub title: &'static str,
    pub charts: Vec<Chart>,
}
