//! Console app to inspect the status of the trackers of a torrent.
//!
//! It reads a JSON snapshot with the state of every local endpoint of every
//! tracker, and it prints the reduced tracker reports.
//!
//! A sample snapshot:
//!
//! ```json
//! [
//!     {
//!         "url": "udp://tracker.example:6969/announce",
//!         "tier": 0,
//!         "verified": true,
//!         "endpoints": [
//!             { "local_identity": "0.0.0.0:6881", "seeders": 12, "leechers": 3, "is_functioning": true },
//!             { "local_identity": "[::]:6881", "last_error": "connection refused", "is_functioning": false }
//!         ]
//!     }
//! ]
//! ```
pub mod app;
pub mod printer;
pub mod snapshot;
