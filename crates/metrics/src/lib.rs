//! Pure metric computations over the loaded snapshot tables.
//!
//! Every function here is a deterministic, terminating computation over an
//! immutable [`report_core::DataContext`]. No operation performs I/O and
//! none returns `Result`: degenerate ratios resolve to defined fallbacks
//! and unknown lookups resolve to explicit sentinels.

pub mod cohorts;
pub mod enrichment;
pub mod funnel;
pub mod rankings;
pub mod rates;
pub mod rollups;

pub use cohorts::{cohort_curve, CohortPoint};
pub use enrichment::{continent_of, display_name_of, subregion_of, Subregion};
pub use funnel::{funnel, FunnelStage};
pub use rankings::top_n;
pub use rates::{engagement_rate, retention_rate, FIRST_OPEN, PROGRESS, SESSION_START};
pub use rollups::{canonical_categories, category_rollup, regional_rollup, RegionRollup};
