use torrust_tracker_status_primitives::status::Status;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
use torrust_tracker_status_primitives::Tier;
use tracing::debug;

use super::resolver::{collect_messages, resolve_status};
use super::{Entry, TrackerEntryReport};
use crate::endpoint::{Endpoint, EndpointReport, EndpointState};
use crate::EntrySingle;

impl EntrySingle {
    fn messages_for(&self, status: Status) -> Vec<String> {
        let messages = collect_messages(self.endpoints.iter().map(|endpoint| endpoint.message.as_str()));

        // If there was no response from the tracker and it is not working show the errors.
        if messages.is_empty() && status == Status::NotWorking {
            return collect_messages(self.endpoints.iter().map(|endpoint| endpoint.last_error.as_str()));
        }

        messages
    }
}

impl Entry for EntrySingle {
    fn url(&self) -> &TrackerUrl {
        &self.url
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    fn set_tier(&mut self, tier: Tier) {
        debug!(url = %self.url, from = self.tier, to = tier, "tracker tier changed");
        self.tier = tier;
    }

    fn is_verified(&self) -> bool {
        self.verified
    }

    fn set_verified(&mut self) {
        if !self.verified {
            debug!(url = %self.url, "tracker verified");
            self.verified = true;
        }
    }

    fn status(&self) -> Status {
        resolve_status(self.verified, self.endpoints.iter().map(|endpoint| endpoint.view().status()))
    }

    fn messages(&self) -> Vec<String> {
        self.messages_for(self.status())
    }

    fn endpoints(&self) -> Vec<Endpoint<'_>> {
        self.endpoints.iter().map(Endpoint::new).collect()
    }

    fn get_endpoints_len(&self) -> usize {
        self.endpoints.len()
    }

    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.endpoints
            .iter()
            .map(|endpoint| endpoint.view().swarm_metadata())
            .fold(SwarmMetadata::unknown(), SwarmMetadata::best)
    }

    fn upsert_endpoint(&mut self, state: EndpointState) -> bool {
        match self
            .endpoints
            .iter_mut()
            .find(|endpoint| endpoint.local_identity == state.local_identity)
        {
            Some(endpoint) => {
                *endpoint = state;
                false
            }
            None => {
                debug!(url = %self.url, endpoint = %state.local_identity, "new local endpoint");
                self.endpoints.push(state);
                true
            }
        }
    }

    fn remove_endpoint(&mut self, local_identity: &str) -> Option<EndpointState> {
        let position = self
            .endpoints
            .iter()
            .position(|endpoint| endpoint.local_identity == local_identity)?;

        debug!(url = %self.url, endpoint = %local_identity, "local endpoint removed");

        Some(self.endpoints.remove(position))
    }

    fn report(&self) -> TrackerEntryReport {
        let status = self.status();
        let swarm_metadata = self.get_swarm_metadata();

        TrackerEntryReport {
            url: self.url.to_string(),
            tier: self.tier,
            verified: self.verified,
            status,
            messages: self.messages_for(status),
            seeders: swarm_metadata.complete,
            leechers: swarm_metadata.incomplete,
            downloaded: swarm_metadata.downloaded,
            endpoints: self.endpoints.iter().map(|endpoint| EndpointReport::from(endpoint.view())).collect(),
        }
    }
}
