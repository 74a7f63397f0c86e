//! Country enrichment via static market lookup.
//!
//! Two independent mappings exist: a continent-level one backing display
//! names and a sub-region one backing regional rollups. Both are total:
//! unknown codes resolve to an explicit fallback, never an error. Raw
//! labels that are not ISO-2 shaped (e.g. "(not set)") skip the lookup and
//! fall through unchanged.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Compiled ISO-2 shape check (lazy initialization).
static ISO2_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("invalid ISO-2 pattern"));

/// Sub-regions used for regional rollups.
///
/// Closed set; every country resolves to exactly one variant. `Unknown` is
/// a first-class bucket that rollups keep, never drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subregion {
    EastAfrica,
    WestAfrica,
    SouthernAfrica,
    NorthAfrica,
    Unknown,
}

impl Subregion {
    /// Human label for chart axes and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EastAfrica => "East Africa",
            Self::WestAfrica => "West Africa",
            Self::SouthernAfrica => "Southern Africa",
            Self::NorthAfrica => "North Africa",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Subregion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Uppercases ISO-2 shaped codes; other labels get no canonical form.
fn canonical(code: &str) -> Option<String> {
    if ISO2_SHAPE.is_match(code) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

/// Display name for a country code.
///
/// Unknown codes echo the input so downstream labels are always present.
pub fn display_name_of(code: &str) -> String {
    let Some(canonical) = canonical(code) else {
        return code.to_string();
    };
    match canonical.as_str() {
        "KE" => "Kenya".to_string(),
        "NG" => "Nigeria".to_string(),
        "GH" => "Ghana".to_string(),
        "ZA" => "South Africa".to_string(),
        "ZW" => "Zimbabwe".to_string(),
        "SN" => "Senegal".to_string(),
        "UG" => "Uganda".to_string(),
        _ => code.to_string(),
    }
}

/// Continent for a country code; `"Unknown"` for unmapped input.
pub fn continent_of(code: &str) -> &'static str {
    let Some(canonical) = canonical(code) else {
        return "Unknown";
    };
    match canonical.as_str() {
        "KE" | "NG" | "GH" | "ZA" | "ZW" | "SN" | "UG" => "Africa",
        _ => "Unknown",
    }
}

/// Sub-region for a country code.
///
/// Independent of [`continent_of`]: the sub-region table covers markets the
/// display mapping does not (e.g. TZ, EG) and vice versa.
pub fn subregion_of(code: &str) -> Subregion {
    let Some(canonical) = canonical(code) else {
        return Subregion::Unknown;
    };
    match canonical.as_str() {
        "KE" | "UG" | "TZ" => Subregion::EastAfrica,
        "NG" | "GH" | "SN" | "CI" | "NE" | "ML" => Subregion::WestAfrica,
        "ZA" | "ZW" | "ZM" => Subregion::SouthernAfrica,
        "DZ" | "EG" | "MA" | "TN" => Subregion::NorthAfrica,
        _ => Subregion::Unknown,
    }
}
