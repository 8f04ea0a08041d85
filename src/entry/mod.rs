use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use torrust_tracker_status_primitives::scrape_count::ScrapeCount;
use torrust_tracker_status_primitives::status::Status;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
use torrust_tracker_status_primitives::Tier;

use crate::endpoint::{Endpoint, EndpointReport, EndpointState};

pub mod mutex_parking_lot;
pub mod mutex_std;
pub mod resolver;
pub mod rw_lock_parking_lot;
pub mod single;

pub trait Entry {
    /// The tracker announce URL.
    fn url(&self) -> &TrackerUrl;

    /// The announce tier. Lower tiers are announced to first.
    fn tier(&self) -> Tier;

    fn set_tier(&mut self, tier: Tier);

    /// Returns True if the tracker has ever completed a confirmed successful
    /// announce.
    fn is_verified(&self) -> bool;

    /// It marks the tracker as verified. A verified tracker is never
    /// unverified again.
    fn set_verified(&mut self);

    /// It reduces the status of every local endpoint into the tracker status.
    ///
    /// See [`resolver::resolve_status`].
    fn status(&self) -> Status;

    /// It returns the trimmed and deduplicated tracker messages, in endpoint
    /// order. When there are none and the tracker is not working, it returns
    /// the last errors instead.
    fn messages(&self) -> Vec<String>;

    /// The views over the local endpoints, in registration order.
    fn endpoints(&self) -> Vec<Endpoint<'_>>;

    /// Returns the number of local endpoints.
    fn get_endpoints_len(&self) -> usize;

    /// It returns the best known swarm metadata (statistics) as a struct:
    ///
    /// `(downloaded, complete, incomplete)`
    ///
    /// Every counter is the maximum over the local endpoints. Unknown counters
    /// only win when all of them are unknown.
    fn get_swarm_metadata(&self) -> SwarmMetadata;

    fn seeders(&self) -> ScrapeCount {
        self.get_swarm_metadata().complete
    }

    fn leechers(&self) -> ScrapeCount {
        self.get_swarm_metadata().incomplete
    }

    fn downloaded(&self) -> ScrapeCount {
        self.get_swarm_metadata().downloaded
    }

    /// It inserts or replaces the state of a local endpoint, and returns true
    /// if the endpoint was not known.
    ///
    /// A replaced endpoint keeps its original position.
    fn upsert_endpoint(&mut self, state: EndpointState) -> bool;

    /// It removes a local endpoint that has been torn down.
    fn remove_endpoint(&mut self, local_identity: &str) -> Option<EndpointState>;

    /// It builds the presentation report from one reduction.
    fn report(&self) -> TrackerEntryReport;
}

/// The same operations as [`Entry`] for an entry shared behind a lock.
///
/// Every call runs under one lock acquisition, so readers always observe a
/// consistent snapshot of the endpoints and the verified flag.
#[allow(clippy::module_name_repetitions)]
pub trait EntrySync {
    fn url(&self) -> TrackerUrl;
    fn tier(&self) -> Tier;
    fn set_tier(&self, tier: Tier);
    fn is_verified(&self) -> bool;
    fn set_verified(&self);
    fn status(&self) -> Status;
    fn messages(&self) -> Vec<String>;
    fn endpoints(&self) -> Vec<EndpointState>;
    fn get_endpoints_len(&self) -> usize;
    fn get_swarm_metadata(&self) -> SwarmMetadata;
    fn upsert_endpoint(&self, state: EndpointState) -> bool;
    fn remove_endpoint(&self, local_identity: &str) -> Option<EndpointState>;
    fn report(&self) -> TrackerEntryReport;
    fn snapshot(&self) -> TrackerEntry;
}

/// A data structure containing all the information about one tracker of a
/// torrent.
///
/// It owns the state of every local endpoint announcing to the tracker. The
/// status, messages and swarm statistics are not stored: they are reduced
/// from the endpoint states on every read.
#[derive(Clone, Debug, Serialize)]
pub struct TrackerEntry {
    /// The tracker announce URL.
    pub(crate) url: TrackerUrl,
    /// The announce tier.
    pub(crate) tier: Tier,
    /// Whether the tracker has ever completed a confirmed successful announce.
    pub(crate) verified: bool,
    /// The local endpoints announcing to this tracker, in registration order.
    pub(crate) endpoints: Vec<EndpointState>,
}

impl TrackerEntry {
    #[must_use]
    pub fn new(url: impl Into<TrackerUrl>, tier: Tier) -> Self {
        Self {
            url: url.into(),
            tier,
            verified: false,
            endpoints: Vec::new(),
        }
    }
}

/// Two entries are the same tracker when they have the same tier and the same
/// normalized URL. Endpoints and the verified flag are not compared.
impl PartialEq for TrackerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.tier == other.tier && self.url == other.url
    }
}

impl Eq for TrackerEntry {}

impl Hash for TrackerEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        self.tier.hash(state);
    }
}

/// Presentation-ready summary of one tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerEntryReport {
    pub url: String,
    pub tier: Tier,
    pub verified: bool,
    pub status: Status,
    pub messages: Vec<String>,
    pub seeders: ScrapeCount,
    pub leechers: ScrapeCount,
    pub downloaded: ScrapeCount,
    pub endpoints: Vec<EndpointReport>,
}
