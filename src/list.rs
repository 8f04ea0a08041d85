//! The trackers of one torrent.
//!
//! A torrent can't have the same tracker twice in the same tier. Two entries
//! are the same tracker when they have the same tier and the same normalized
//! URL (see [`TrackerEntry`](crate::entry::TrackerEntry) equality).
use std::collections::HashSet;

use torrust_tracker_status_configuration::Core;
use torrust_tracker_status_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_status_primitives::tracker_list_metrics::TrackerListMetrics;
use torrust_tracker_status_primitives::tracker_url::TrackerUrl;
use torrust_tracker_status_primitives::Tier;
use tracing::debug;

use crate::entry::{Entry as _, TrackerEntryReport};
use crate::EntrySingle;

#[derive(Clone, Debug, Default)]
pub struct TrackerList {
    /// The tier for trackers added without one.
    default_tier: Tier,
    /// The trackers in the order they were added.
    entries: Vec<EntrySingle>,
}

impl TrackerList {
    #[must_use]
    pub fn new(default_tier: Tier) -> Self {
        Self {
            default_tier,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_config(core: &Core) -> Self {
        Self::new(core.default_tier)
    }

    #[must_use]
    pub fn default_tier(&self) -> Tier {
        self.default_tier
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, entry: &EntrySingle) -> bool {
        self.entries.contains(entry)
    }

    /// It adds a tracker, and returns true if it was not already in the list.
    ///
    /// The tracker gets the default tier when `tier` is `None`.
    pub fn add(&mut self, url: &str, tier: Option<Tier>) -> bool {
        let entry = EntrySingle::new(url, tier.unwrap_or(self.default_tier));

        !self.add_entries([entry]).is_empty()
    }

    /// It adds the trackers that are not already in the list, also ignoring
    /// duplicates inside `entries`. It returns the added trackers.
    pub fn add_entries<I>(&mut self, entries: I) -> Vec<EntrySingle>
    where
        I: IntoIterator<Item = EntrySingle>,
    {
        let batch: Vec<EntrySingle> = entries.into_iter().collect();

        let is_new: Vec<bool> = {
            let mut known: HashSet<&EntrySingle> = self.entries.iter().collect();
            batch.iter().map(|entry| known.insert(entry)).collect()
        };

        let added: Vec<EntrySingle> = batch
            .into_iter()
            .zip(is_new)
            .filter_map(|(entry, is_new)| {
                if !is_new {
                    debug!(url = %entry.url(), tier = entry.tier(), "duplicated tracker ignored");
                }
                is_new.then_some(entry)
            })
            .collect();

        for entry in &added {
            debug!(url = %entry.url(), tier = entry.tier(), "tracker added");
        }

        self.entries.extend(added.iter().cloned());

        added
    }

    /// It removes every tier of a tracker, and returns the removed entries.
    pub fn remove(&mut self, url: &str) -> Vec<EntrySingle> {
        let url = TrackerUrl::new(url);

        let (removed, kept): (Vec<EntrySingle>, Vec<EntrySingle>) =
            self.entries.drain(..).partition(|entry| *entry.url() == url);

        self.entries = kept;

        if !removed.is_empty() {
            debug!(%url, count = removed.len(), "tracker removed");
        }

        removed
    }

    /// The first tracker with this URL in announce order.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&EntrySingle> {
        let url = TrackerUrl::new(url);

        self.entries().into_iter().find(|entry| *entry.url() == url)
    }

    /// Mutable access to the first tracker with this URL in announce order.
    /// That's where the announce machinery pushes endpoint states.
    pub fn get_mut(&mut self, url: &str) -> Option<&mut EntrySingle> {
        let url = TrackerUrl::new(url);

        self.entries
            .iter_mut()
            .filter(|entry| *entry.url() == url)
            .min_by_key(|entry| entry.tier())
    }

    /// It moves the first tracker with this URL to another tier.
    ///
    /// It returns false when the tracker is not in the list, or when it's
    /// already in the target tier.
    pub fn set_tier(&mut self, url: &str, tier: Tier) -> bool {
        let target = EntrySingle::new(url, tier);

        if self.contains(&target) {
            debug!(url = %target.url(), tier, "tracker already in tier");
            return false;
        }

        match self.get_mut(url) {
            Some(entry) => {
                entry.set_tier(tier);
                true
            }
            None => false,
        }
    }

    /// The trackers in announce order: by tier, and in the order they were
    /// added inside a tier.
    #[must_use]
    pub fn entries(&self) -> Vec<&EntrySingle> {
        let mut entries: Vec<&EntrySingle> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.tier());
        entries
    }

    /// The number of trackers in every status.
    #[must_use]
    pub fn get_metrics(&self) -> TrackerListMetrics {
        self.entries.iter().map(EntrySingle::status).collect()
    }

    /// The best known swarm metadata over every tracker.
    #[must_use]
    pub fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.entries
            .iter()
            .map(EntrySingle::get_swarm_metadata)
            .fold(SwarmMetadata::unknown(), SwarmMetadata::best)
    }

    /// One report per tracker, in announce order.
    #[must_use]
    pub fn reports(&self) -> Vec<TrackerEntryReport> {
        self.entries().into_iter().map(EntrySingle::report).collect()
    }
}
