//! Program to inspect the status of the trackers of a torrent.
//!
//! ```text
//! cargo run --bin tracker_status -- --snapshot-path "./share/default/snapshots/trackers.json"
//! ```
use torrust_tracker_status::console::inspector::app;

fn main() -> anyhow::Result<()> {
    app::run()
}
