//! Dataset location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the five snapshot exports live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory holding the processed exports
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Engagement event counts
    #[serde(default = "default_engagement_file")]
    pub engagement_file: String,
    /// Device distribution
    #[serde(default = "default_devices_file")]
    pub devices_file: String,
    /// Category-tagged key events
    #[serde(default = "default_events_file")]
    pub events_file: String,
    /// Country distribution
    #[serde(default = "default_countries_file")]
    pub countries_file: String,
    /// Weekly cohort retention counts
    #[serde(default = "default_consistency_file")]
    pub consistency_file: String,
}

fn default_dir() -> String {
    "datasets/processed".to_string()
}

fn default_engagement_file() -> String {
    "engagement_time.csv".to_string()
}

fn default_devices_file() -> String {
    "device_distribution.csv".to_string()
}

fn default_events_file() -> String {
    "events.csv".to_string()
}

fn default_countries_file() -> String {
    "country_distribution.csv".to_string()
}

fn default_consistency_file() -> String {
    "consistency.csv".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            engagement_file: default_engagement_file(),
            devices_file: default_devices_file(),
            events_file: default_events_file(),
            countries_file: default_countries_file(),
            consistency_file: default_consistency_file(),
        }
    }
}

impl DatasetConfig {
    /// A config rooted at a specific directory, default file names.
    pub fn in_dir(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn engagement_path(&self) -> PathBuf {
        self.join(&self.engagement_file)
    }

    pub fn devices_path(&self) -> PathBuf {
        self.join(&self.devices_file)
    }

    pub fn events_path(&self) -> PathBuf {
        self.join(&self.events_file)
    }

    pub fn countries_path(&self) -> PathBuf {
        self.join(&self.countries_file)
    }

    pub fn consistency_path(&self) -> PathBuf {
        self.join(&self.consistency_file)
    }

    fn join(&self, file: &str) -> PathBuf {
        PathBuf::from(&self.dir).join(file)
    }
}
