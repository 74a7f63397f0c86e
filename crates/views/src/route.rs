//! View identifiers and path routing.
//!
//! The view set is a closed enumeration; routing is a total function with
//! an explicit not-found variant. No open-ended string dispatch.

use serde::{Deserialize, Serialize};

/// All recognized dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Overview,
    Funnel,
    Engagement,
    Devices,
    Geography,
    Insights,
}

impl ViewId {
    /// Every view, in sidebar order.
    pub const ALL: [ViewId; 6] = [
        Self::Overview,
        Self::Funnel,
        Self::Engagement,
        Self::Devices,
        Self::Geography,
        Self::Insights,
    ];

    /// Stable identifier (also the JSON value).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Funnel => "funnel",
            Self::Engagement => "engagement",
            Self::Devices => "devices",
            Self::Geography => "geography",
            Self::Insights => "insights",
        }
    }

    /// Page title handed to the sink.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Safari City Analytics Overview",
            Self::Funnel => "Player Funnel Analysis",
            Self::Engagement => "Player Engagement Metrics",
            Self::Devices => "Device Analytics",
            Self::Geography => "Geographic Distribution",
            Self::Insights => "Strategic Insights",
        }
    }

    /// Navigation path served by the dispatcher.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Funnel => "/funnel",
            Self::Engagement => "/engagement",
            Self::Devices => "/devices",
            Self::Geography => "/geography",
            Self::Insights => "/insights",
        }
    }
}

/// Outcome of resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(ViewId),
    /// Unrecognized path; the dispatcher decides how to surface it.
    NotFound { path: String },
}

/// Maps a navigation path to a view.
///
/// Total: every input resolves to either a page or `NotFound`, never an
/// error. A single trailing slash is tolerated ("/funnel/" == "/funnel").
pub fn resolve(path: &str) -> Route {
    let normalized = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    ViewId::ALL
        .iter()
        .find(|v| v.path() == normalized)
        .map(|v| Route::Page(*v))
        .unwrap_or_else(|| Route::NotFound {
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_resolves_from_its_path() {
        for view in ViewId::ALL {
            assert_eq!(resolve(view.path()), Route::Page(view));
        }
    }

    #[test]
    fn root_is_overview() {
        assert_eq!(resolve("/"), Route::Page(ViewId::Overview));
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(resolve("/devices/"), Route::Page(ViewId::Devices));
    }

    #[test]
    fn unknown_paths_are_not_found_not_errors() {
        for path in ["/nope", "", "/funnel/extra", "funnel"] {
            match resolve(path) {
                Route::NotFound { path: p } => assert_eq!(p, path),
                other => panic!("expected NotFound for {path:?}, got {other:?}"),
            }
        }
    }
}
