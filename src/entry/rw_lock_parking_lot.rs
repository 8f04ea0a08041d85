use std::sync::Arc;

use torrust_tracker_status_primitives::status::Status;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
use torrust_tracker_status_primitives::Tier;

use super::{Entry, EntrySync, TrackerEntryReport};
use crate::endpoint::EndpointState;
use crate::{EntryRwLockParkingLot, EntrySingle};

impl EntrySync for EntryRwLockParkingLot {
    fn url(&self) -> TrackerUrl {
        self.read().url().clone()
    }

    fn tier(&self) -> Tier {
        self.read().tier()
    }

    fn set_tier(&self, tier: Tier) {
        self.write().set_tier(tier);
    }

    fn is_verified(&self) -> bool {
        self.read().is_verified()
    }

    fn set_verified(&self) {
        self.write().set_verified();
    }

    fn status(&self) -> Status {
        self.read().status()
    }

    fn messages(&self) -> Vec<String> {
        self.read().messages()
    }

    fn endpoints(&self) -> Vec<EndpointState> {
        self.read().endpoints.clone()
    }

    fn get_endpoints_len(&self) -> usize {
        self.read().get_endpoints_len()
    }

    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.read().get_swarm_metadata()
    }

    fn upsert_endpoint(&self, state: EndpointState) -> bool {
        self.write().upsert_endpoint(state)
    }

    fn remove_endpoint(&self, local_identity: &str) -> Option<EndpointState> {
        self.write().remove_endpoint(local_identity)
    }

    fn report(&self) -> TrackerEntryReport {
        self.read().report()
    }

    fn snapshot(&self) -> EntrySingle {
        self.read().clone()
    }
}

impl From<EntrySingle> for EntryRwLockParkingLot {
    fn from(entry: EntrySingle) -> Self {
        Arc::new(parking_lot::RwLock::new(entry))
    }
}
