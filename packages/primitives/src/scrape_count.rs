//! Scrape counter reported by a tracker for one local endpoint.
//!
//! Trackers are not required to include the swarm counters in their
//! responses, so every counter can be *unknown*. Outside this crate the
//! unknown value is represented with the `-1` sentinel:
//!
//! ```rust
//! use torrust_tracker_status_primitives::scrape_count::ScrapeCount;
//!
//! assert_eq!(ScrapeCount::from(-1).to_i64(), -1);
//! assert_eq!(ScrapeCount::from(7).to_i64(), 7);
//! assert!(ScrapeCount::from(7) > ScrapeCount::unknown());
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

/// The value used for unknown counters at the crate boundary.
pub const UNKNOWN_SENTINEL: i64 = -1;

/// A non-negative swarm counter or the *unknown* value.
///
/// The ordering is sentinel-aware: an unknown counter is smaller than any
/// known counter, including zero. That's the only way the unknown value takes
/// part in a comparison.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct ScrapeCount(Option<u32>);

impl ScrapeCount {
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(Some(count))
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn get(&self) -> Option<u32> {
        self.0
    }

    /// It returns the counter using the `-1` sentinel for the unknown value.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        self.0.map_or(UNKNOWN_SENTINEL, i64::from)
    }

    /// The best known value of the two counters.
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        self.max(other)
    }
}

impl From<u32> for ScrapeCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

/// Negative values (and values that do not fit in a `u32`) are unknown.
impl From<i64> for ScrapeCount {
    fn from(count: i64) -> Self {
        Self(u32::try_from(count).ok())
    }
}

impl From<i32> for ScrapeCount {
    fn from(count: i32) -> Self {
        Self::from(i64::from(count))
    }
}

impl From<ScrapeCount> for i64 {
    fn from(count: ScrapeCount) -> Self {
        count.to_i64()
    }
}

impl fmt::Display for ScrapeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(count) => write!(f, "{count}"),
            None => f.write_str("N/A"),
        }
    }
}
