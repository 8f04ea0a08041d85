//! Tracker announce URL.
//!
//! Two tracker URLs are the same tracker when they are equal after
//! normalization, not when they are the same literal string:
//!
//! ```rust
//! use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
//!
//! let url = TrackerUrl::new("HTTP://Tracker.Example:80/announce");
//!
//! assert_eq!(url, TrackerUrl::new("http://tracker.example/announce"));
//! assert_eq!(url.as_str(), "HTTP://Tracker.Example:80/announce");
//! ```
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

/// A tracker URL.
///
/// It keeps the text it was created from, which is what gets displayed,
/// and the normalized form used for comparisons and hashing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TrackerUrl {
    original: String,
    normalized: String,
}

impl TrackerUrl {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            original: url.to_owned(),
            normalized: normalize(url),
        }
    }

    /// The URL as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The URL used to compare trackers.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Scheme and host are lowercased, the default port is removed and an empty
/// path becomes `/`. Text that is not a valid URL is only trimmed.
fn normalize(url: &str) -> String {
    let trimmed = url.trim();

    let Ok(mut parsed) = Url::parse(trimmed) else {
        return trimmed.to_owned();
    };

    // The parser only lowercases the hosts of special schemes, `udp` is not one.
    if let Some(host) = parsed.host_str().map(str::to_ascii_lowercase) {
        if parsed.set_host(Some(&host)).is_err() {
            return trimmed.to_owned();
        }
    }

    parsed.to_string()
}

impl PartialEq for TrackerUrl {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for TrackerUrl {}

impl Hash for TrackerUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl Ord for TrackerUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

impl PartialOrd for TrackerUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TrackerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl From<&str> for TrackerUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for TrackerUrl {
    fn from(url: String) -> Self {
        Self {
            normalized: normalize(&url),
            original: url,
        }
    }
}

impl From<TrackerUrl> for String {
    fn from(url: TrackerUrl) -> Self {
        url.original
    }
}
