//! Local endpoints announcing to a tracker.
//!
//! A torrent announces to the same tracker from every local network endpoint
//! it is bound to (for example, one per network interface and address family).
//! Every endpoint has its own announce outcome. The announce machinery pushes
//! an [`EndpointState`] snapshot each time that outcome changes.
//!
//! A sample endpoint state:
//!
//! ```rust
//! use torrust_tracker_status::endpoint::EndpointState;
//! use torrust_tracker_status_primitives::scrape_count::ScrapeCount;
//!
//! let state = EndpointState {
//!     local_identity: "192.168.1.10:6881".to_string(),
//!     seeders: ScrapeCount::new(12),
//!     leechers: ScrapeCount::new(3),
//!     downloaded: ScrapeCount::unknown(),
//!     message: String::new(),
//!     last_error: String::new(),
//!     is_negotiating: false,
//!     is_functioning: true,
//! };
//! ```
use serde::{Deserialize, Serialize};
use torrust_tracker_status_primitives::scrape_count::ScrapeCount;
use torrust_tracker_status_primitives::status::Status;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;

/// Snapshot of the announce state of one local endpoint.
///
/// When `is_negotiating` is set the other fields describe the previous
/// announce and they are stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointState {
    /// The bound local network endpoint. It identifies the endpoint inside a
    /// tracker entry.
    pub local_identity: String,
    /// The number of seeders reported by the tracker.
    #[serde(default)]
    pub seeders: ScrapeCount,
    /// The number of leechers reported by the tracker.
    #[serde(default)]
    pub leechers: ScrapeCount,
    /// The number of completed downloads reported by the tracker.
    #[serde(default)]
    pub downloaded: ScrapeCount,
    /// The message in the tracker response, if any.
    #[serde(default)]
    pub message: String,
    /// The description of the last transport or protocol error, if any.
    #[serde(default)]
    pub last_error: String,
    /// An announce request is in flight.
    #[serde(default)]
    pub is_negotiating: bool,
    /// No announce has failed since the last success. An endpoint that has
    /// never announced is functioning.
    #[serde(default = "functioning_by_default")]
    pub is_functioning: bool,
}

fn functioning_by_default() -> bool {
    true
}

impl EndpointState {
    /// A new endpoint that has not announced yet.
    #[must_use]
    pub fn new(local_identity: &str) -> Self {
        Self {
            local_identity: local_identity.to_owned(),
            seeders: ScrapeCount::unknown(),
            leechers: ScrapeCount::unknown(),
            downloaded: ScrapeCount::unknown(),
            message: String::new(),
            last_error: String::new(),
            is_negotiating: false,
            is_functioning: true,
        }
    }

    #[must_use]
    pub fn view(&self) -> Endpoint<'_> {
        Endpoint::new(self)
    }
}

/// Read-only view over the state of one local endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    state: &'a EndpointState,
}

impl<'a> Endpoint<'a> {
    #[must_use]
    pub fn new(state: &'a EndpointState) -> Self {
        Self { state }
    }

    /// The display name of the local endpoint.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.state.local_identity
    }

    /// There is no `NotContacted` status for a single endpoint: an endpoint
    /// that has never announced is `NotWorking`.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.state.is_negotiating {
            return Status::Updating;
        }

        if !self.state.is_functioning {
            return Status::NotWorking;
        }

        Status::Working
    }

    /// The tracker message, or the last error when the endpoint is not
    /// functioning and the tracker didn't send a message. Never both.
    #[must_use]
    pub fn message(&self) -> &'a str {
        if !self.state.message.is_empty() {
            return &self.state.message;
        }

        if !self.state.is_functioning {
            return &self.state.last_error;
        }

        ""
    }

    #[must_use]
    pub fn seeders(&self) -> ScrapeCount {
        self.state.seeders
    }

    #[must_use]
    pub fn leechers(&self) -> ScrapeCount {
        self.state.leechers
    }

    #[must_use]
    pub fn downloaded(&self) -> ScrapeCount {
        self.state.downloaded
    }

    #[must_use]
    pub fn swarm_metadata(&self) -> SwarmMetadata {
        SwarmMetadata {
            downloaded: self.state.downloaded,
            complete: self.state.seeders,
            incomplete: self.state.leechers,
        }
    }

    #[must_use]
    pub fn state(&self) -> &'a EndpointState {
        self.state
    }
}

/// Presentation-ready summary of one local endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointReport {
    pub name: String,
    pub status: Status,
    pub message: String,
    pub seeders: ScrapeCount,
    pub leechers: ScrapeCount,
    pub downloaded: ScrapeCount,
}

impl From<Endpoint<'_>> for EndpointReport {
    fn from(endpoint: Endpoint<'_>) -> Self {
        Self {
            name: endpoint.name().to_owned(),
            status: endpoint.status(),
            message: endpoint.message().to_owned(),
            seeders: endpoint.seeders(),
            leechers: endpoint.leechers(),
            downloaded: endpoint.downloaded(),
        }
    }
}
