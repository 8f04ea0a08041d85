//! Primitive types for the [Torrust Tracker Status](https://docs.rs/torrust-tracker-status) library.
//!
//! This module contains the basic data structures used to describe the
//! trackers a `BitTorrent` client announces to: the tracker URL, the status
//! of a tracker and the swarm statistics (scrape counters) reported by it.
//! These structures are used not only by the status library but also by the
//! presentation layers that consume its reports.
pub mod scrape_count;
pub mod status;
pub mod swarm_metadata;
pub mod tracker_list_metrics;
pub mod tracker_url;

/// The announce tier of a tracker. Trackers in lower tiers are announced to first.
pub type Tier = u32;
