//! Safari City Reporting Engine
//!
//! Single-process reporting over static analytics snapshots:
//! - Loads the five pre-aggregated CSV exports once at startup
//! - Derives funnel, retention, rollup, and cohort metrics
//! - Assembles render-ready chart packages per dashboard view

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use dataset::DatasetConfig;
use telemetry::init_tracing_from_env;
use views::{assemble, resolve, Route, ViewId};

/// Application configuration.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default)]
    dataset: DatasetConfig,

    /// Directory for the per-view JSON packages; stdout when unset
    #[serde(default)]
    output_dir: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!(
        "Starting Safari City reporting engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = load_config()?;

    // Load the snapshot tables once; immutable for the rest of the process.
    let ctx = dataset::load_context(&config.dataset).context("Failed to load snapshot tables")?;

    // Resolve requested views (every view when none is named).
    let requested = requested_views()?;

    for view in &requested {
        let package = assemble(*view, &ctx);
        let json = serde_json::to_string_pretty(&package)
            .context("Failed to serialize render package")?;

        match &config.output_dir {
            Some(dir) => {
                let path = Path::new(dir).join(format!("{}.json", view.as_str()));
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create output directory '{dir}'"))?;
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(view = view.as_str(), path = %path.display(), "Render package written");
            }
            None => println!("{json}"),
        }
    }

    info!(views = requested.len(), "Done");
    Ok(())
}

/// Maps CLI arguments (navigation paths) to views.
///
/// An unrecognized path is a hard exit: the NotFound outcome is for the
/// dispatcher to surface, and on the CLI that means a non-zero status.
fn requested_views() -> Result<Vec<ViewId>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(ViewId::ALL.to_vec());
    }

    let mut selected = Vec::with_capacity(args.len());
    for arg in &args {
        match resolve(arg) {
            Route::Page(view) => selected.push(view),
            Route::NotFound { path } => {
                warn!(path = %path, "Requested path does not map to a view");
                bail!("no view at path '{path}'");
            }
        }
    }
    Ok(selected)
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("REPORTING")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    Ok(config)
}
