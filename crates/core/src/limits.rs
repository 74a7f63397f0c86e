//! Field limits for snapshot records.
//!
//! The snapshots are small pre-aggregated exports, so these caps exist to
//! reject corrupted files early rather than to bound memory. The
//! `#[validate]` derive macro requires literal values in attributes, so
//! field limits are duplicated there. Keep both in sync when modifying.

/// Event name max length (chars).
pub const MAX_EVENT_NAME_CHARS: usize = 128;

/// Device model label max length (chars).
pub const MAX_DEVICE_MODEL_CHARS: usize = 128;

/// Country code / raw country label max length (chars).
///
/// ISO-2 codes are two chars; raw labels like "(not set)" stay well under
/// this cap.
pub const MAX_COUNTRY_CODE_CHARS: usize = 64;

/// Maximum number of week columns accepted in a cohort row.
///
/// The export tracks weekly retention for at most one year.
pub const MAX_COHORT_WEEKS: usize = 53;
