use std::sync::Arc;

use torrust_tracker_status_primitives::status::Status;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
use torrust_tracker_status_primitives::Tier;

use super::{Entry, EntrySync, TrackerEntryReport};
use crate::endpoint::EndpointState;
use crate::{EntryMutexStd, EntrySingle};

impl EntrySync for EntryMutexStd {
    fn url(&self) -> TrackerUrl {
        self.lock().expect("it should get a lock").url().clone()
    }

    fn tier(&self) -> Tier {
        self.lock().expect("it should get a lock").tier()
    }

    fn set_tier(&self, tier: Tier) {
        self.lock().expect("it should get a lock").set_tier(tier);
    }

    fn is_verified(&self) -> bool {
        self.lock().expect("it should get a lock").is_verified()
    }

    fn set_verified(&self) {
        self.lock().expect("it should get a lock").set_verified();
    }

    fn status(&self) -> Status {
        self.lock().expect("it should get a lock").status()
    }

    fn messages(&self) -> Vec<String> {
        self.lock().expect("it should get a lock").messages()
    }

    fn endpoints(&self) -> Vec<EndpointState> {
        self.lock().expect("it should get a lock").endpoints.clone()
    }

    fn get_endpoints_len(&self) -> usize {
        self.lock().expect("it should get a lock").get_endpoints_len()
    }

    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.lock().expect("it should get a lock").get_swarm_metadata()
    }

    fn upsert_endpoint(&self, state: EndpointState) -> bool {
        self.lock().expect("it should get a lock").upsert_endpoint(state)
    }

    fn remove_endpoint(&self, local_identity: &str) -> Option<EndpointState> {
        self.lock().expect("it should get a lock").remove_endpoint(local_identity)
    }

    fn report(&self) -> TrackerEntryReport {
        self.lock().expect("it should get a lock").report()
    }

    fn snapshot(&self) -> EntrySingle {
        self.lock().expect("it should get a lock").clone()
    }
}

impl From<EntrySingle> for EntryMutexStd {
    fn from(entry: EntrySingle) -> Self {
        Arc::new(std::sync::Mutex::new(entry))
    }
}
