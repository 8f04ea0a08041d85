//! Program to inspect the status of the trackers of a torrent.
//!
//! Run providing a snapshot file path:
//!
//! ```text
//! cargo run --bin tracker_status -- --snapshot-path "./share/default/snapshots/trackers.json"
//! TORRUST_TRACKER_STATUS_SNAPSHOT_PATH="./share/default/snapshots/trackers.json" cargo run --bin tracker_status
//! ```
//!
//! Run providing the snapshot:
//!
//! ```text
//! TORRUST_TRACKER_STATUS_SNAPSHOT=$(cat "./share/default/snapshots/trackers.json") cargo run --bin tracker_status -- --format json
//! ```
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use super::printer::{render_text, Console, Printer};
use super::snapshot::{build_tracker_list, parse_from_json, TrackerSnapshot};
use crate::bootstrap::config::initialize_configuration;
use crate::bootstrap::logging::{self, TraceStyle};
use crate::entry::TrackerEntryReport;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot file.
    #[clap(short, long, env = "TORRUST_TRACKER_STATUS_SNAPSHOT_PATH")]
    snapshot_path: Option<PathBuf>,

    /// Direct snapshot content in JSON.
    #[clap(env = "TORRUST_TRACKER_STATUS_SNAPSHOT", hide_env_values = true)]
    snapshot_content: Option<String>,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// # Errors
///
/// Will return an error if the configuration or the snapshot can't be loaded.
pub fn run() -> Result<()> {
    let args = Args::parse();

    let config = initialize_configuration().context("invalid configuration")?;

    logging::setup(&config, &TraceStyle::Compact);

    let snapshots = setup_snapshots(&args)?;

    debug!(trackers = snapshots.len(), "snapshot loaded");

    let list = build_tracker_list(snapshots, &config.core);

    let console = Console::new();

    console.println(render(&list.reports(), args.format)?.trim_end());

    Ok(())
}

fn setup_snapshots(args: &Args) -> Result<Vec<TrackerSnapshot>> {
    // If a snapshot is directly supplied, we use it.
    if let Some(snapshot) = &args.snapshot_content {
        parse_from_json(snapshot).context("invalid snapshot format")
    }
    // or we load it from a file...
    else if let Some(path) = &args.snapshot_path {
        let file_content = std::fs::read_to_string(path).with_context(|| format!("can't read snapshot file {path:?}"))?;
        parse_from_json(&file_content).context("invalid snapshot format")
    }
    // but we cannot run without any snapshot...
    else {
        Err(anyhow::anyhow!("no snapshot provided"))
    }
}

/// It renders the tracker reports in the requested format.
///
/// # Errors
///
/// Will return an error if the reports can't be serialized to JSON.
pub fn render(reports: &[TrackerEntryReport], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(reports.iter().map(render_text).collect::<String>()),
        Format::Json => serde_json::to_string_pretty(reports).context("failed to serialize the tracker reports"),
    }
}
