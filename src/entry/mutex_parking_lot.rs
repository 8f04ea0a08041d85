use std::sync::Arc;

use torrust_tracker_status_primitives::status::Status;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
use torrust_tracker_status_primitives::Tier;

use super::{Entry, EntrySync, TrackerEntryReport};
use crate::endpoint::EndpointState;
use crate::{EntryMutexParkingLot, EntrySingle};

impl EntrySync for EntryMutexParkingLot {
    fn url(&self) -> TrackerUrl {
        self.lock().url().clone()
    }

    fn tier(&self) -> Tier {
        self.lock().tier()
    }

    fn set_tier(&self, tier: Tier) {
        self.lock().set_tier(tier);
    }

    fn is_verified(&self) -> bool {
        self.lock().is_verified()
    }

    fn set_verified(&self) {
        self.lock().set_verified();
    }

    fn status(&self) -> Status {
        self.lock().status()
    }

    fn messages(&self) -> Vec<String> {
        self.lock().messages()
    }

    fn endpoints(&self) -> Vec<EndpointState> {
        self.lock().endpoints.clone()
    }

    fn get_endpoints_len(&self) -> usize {
        self.lock().get_endpoints_len()
    }

    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.lock().get_swarm_metadata()
    }

    fn upsert_endpoint(&self, state: EndpointState) -> bool {
        self.lock().upsert_endpoint(state)
    }

    fn remove_endpoint(&self, local_identity: &str) -> Option<EndpointState> {
        self.lock().remove_endpoint(local_identity)
    }

    fn report(&self) -> TrackerEntryReport {
        self.lock().report()
    }

    fn snapshot(&self) -> EntrySingle {
        self.lock().clone()
    }
}

impl From<EntrySingle> for EntryMutexParkingLot {
    fn from(entry: EntrySingle) -> Self {
        Arc::new(parking_lot::Mutex::new(entry))
    }
}
