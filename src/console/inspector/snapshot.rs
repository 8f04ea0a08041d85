//! Tracker snapshots read by the inspector.
use serde::Deserialize;
use torrust_tracker_status_configuration::Core;
use torrust_tracker_status_primitives::Tier;
use tracing::warn;

use crate::endpoint::EndpointState;
use crate::entry::Entry as _;
use crate::list::TrackerList;
use crate::EntrySingle;

/// DTO with the state of one tracker as the announce machinery saw it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub url: String,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub endpoints: Vec<EndpointState>,
}

impl TrackerSnapshot {
    /// It replays the snapshot into a new tracker entry.
    #[must_use]
    pub fn into_entry(self, default_tier: Tier) -> EntrySingle {
        let mut entry = EntrySingle::new(self.url, self.tier.unwrap_or(default_tier));

        if self.verified {
            entry.set_verified();
        }

        for state in self.endpoints {
            entry.upsert_endpoint(state);
        }

        entry
    }
}

/// It parses the tracker snapshots from a JSON array.
///
/// # Errors
///
/// Will return an error if the JSON is not a valid list of snapshots.
pub fn parse_from_json(json: &str) -> Result<Vec<TrackerSnapshot>, serde_json::Error> {
    serde_json::from_str(json)
}

/// It builds the tracker list of a torrent from the snapshots. Duplicated
/// trackers are ignored.
#[must_use]
pub fn build_tracker_list(snapshots: Vec<TrackerSnapshot>, core: &Core) -> TrackerList {
    let mut list = TrackerList::from_config(core);

    let entries: Vec<EntrySingle> = snapshots
        .into_iter()
        .map(|snapshot| snapshot.into_entry(core.default_tier))
        .collect();
    let total = entries.len();

    let added = list.add_entries(entries);

    if added.len() < total {
        warn!(ignored = total - added.len(), "duplicated trackers in snapshot");
    }

    list
}
