//! Category and regional rollups.

use serde::{Deserialize, Serialize};

use report_core::{CountryCount, DataContext};

use crate::enrichment::{subregion_of, Subregion};
use crate::rates::{FIRST_OPEN, PROGRESS, SESSION_START};

/// Core-loop event names for the canonical category comparison.
pub const CORE_EVENTS: [&str; 3] = [FIRST_OPEN, SESSION_START, "user_engagement"];
/// Progression event names for the canonical category comparison.
pub const PROGRESSION_EVENTS: [&str; 3] = [PROGRESS, "level_up", "tutorial_complete"];

/// The canonical category set used by the category-comparison charts.
pub fn canonical_categories() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("Core", CORE_EVENTS.as_slice()),
        ("Progression", PROGRESSION_EVENTS.as_slice()),
    ]
}

/// Sums engagement counts per category, in the declared category order.
///
/// A category whose member events are all absent still appears, with 0.
pub fn category_rollup(
    ctx: &DataContext,
    categories: &[(&str, &[&str])],
) -> Vec<(String, u64)> {
    categories
        .iter()
        .map(|(name, members)| {
            let count = ctx
                .engagement
                .rows()
                .iter()
                .filter(|r| members.contains(&r.event_name.as_str()))
                .map(|r| r.count)
                .sum();
            (name.to_string(), count)
        })
        .collect()
}

/// Active users aggregated by resolved sub-region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRollup {
    pub region: Subregion,
    pub total_active_users: u64,
    /// Share of the grand total across ALL regions, in [0, 100].
    pub percentage_of_total: f64,
}

/// Groups countries by sub-region and computes each group's share.
///
/// The Unknown region is a bucket like any other: unmapped countries are
/// counted, never dropped. Groups sort descending by total users (ties
/// keep first-seen order). Returns an empty rollup when the grand total is
/// 0, since no share is well-defined.
pub fn regional_rollup(countries: &[CountryCount]) -> Vec<RegionRollup> {
    let mut groups: Vec<(Subregion, u64)> = Vec::new();
    for country in countries {
        let region = subregion_of(&country.country_code);
        match groups.iter_mut().find(|(r, _)| *r == region) {
            Some((_, total)) => *total += country.active_users,
            None => groups.push((region, country.active_users)),
        }
    }

    let grand_total: u64 = groups.iter().map(|(_, t)| t).sum();
    if grand_total == 0 {
        return Vec::new();
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
        .into_iter()
        .map(|(region, total)| RegionRollup {
            region,
            total_active_users: total,
            percentage_of_total: total as f64 / grand_total as f64 * 100.0,
        })
        .collect()
}
