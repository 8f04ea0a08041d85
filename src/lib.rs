//! **Torrust Tracker Status** reduces the state of the local endpoints
//! announcing to a `BitTorrent` tracker into one tracker status.
//!
//! A torrent is usually configured with several trackers, and it announces
//! to every tracker from every local network endpoint it is bound to (for
//! example, one endpoint for IPv4 and another one for IPv6). Each endpoint has
//! its own outcome: it can be negotiating, working or failing, and the tracker
//! can report different swarm statistics and messages to each of them.
//!
//! This library collapses all that into what a user wants to see for one
//! tracker:
//!
//! - One [`Status`](torrust_tracker_status_primitives::status::Status).
//! - One list of deduplicated messages that never hides the error explaining
//!   why a tracker is not working.
//! - The best known swarm statistics (seeders, leechers and completed downloads).
//!
//! ```rust
//! use torrust_tracker_status::endpoint::EndpointState;
//! use torrust_tracker_status::entry::Entry as _;
//! use torrust_tracker_status::EntrySingle;
//! use torrust_tracker_status_primitives::status::Status;
//!
//! let mut tracker = EntrySingle::new("udp://tracker.example:6969/announce", 0);
//!
//! tracker.upsert_endpoint(EndpointState {
//!     last_error: "connection refused".to_string(),
//!     is_functioning: false,
//!     ..EndpointState::new("0.0.0.0:6881")
//! });
//!
//! assert_eq!(tracker.status(), Status::NotWorking);
//! assert_eq!(tracker.messages(), vec!["connection refused".to_string()]);
//! ```
//!
//! Nothing is cached: every read is a fresh reduction over the current
//! endpoint states. The announce machinery is the only writer of an entry.
//! When readers run concurrently, share the entry behind one of the lock
//! wrappers ([`EntryMutexStd`], [`EntryMutexParkingLot`] or
//! [`EntryRwLockParkingLot`]) and use the [`EntrySync`](entry::EntrySync) trait.
//!
//! The trackers of one torrent are kept in a [`TrackerList`](list::TrackerList),
//! which deduplicates them by tier and normalized URL.
use std::sync::Arc;

pub mod bootstrap;
pub mod console;
pub mod endpoint;
pub mod entry;
pub mod list;

// Tracker Entry

pub type EntrySingle = entry::TrackerEntry;
pub type EntryMutexStd = Arc<std::sync::Mutex<EntrySingle>>;
pub type EntryMutexParkingLot = Arc<parking_lot::Mutex<EntrySingle>>;
pub type EntryRwLockParkingLot = Arc<parking_lot::RwLock<EntrySingle>>;
