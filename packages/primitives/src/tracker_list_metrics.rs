use std::ops::AddAssign;

use serde::Serialize;

use crate::status::Status;

/// Structure that holds general metrics for the trackers of one torrent.
///
/// Metrics are the number of trackers in every status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct TrackerListMetrics {
    /// Number of trackers with an announce in flight.
    pub updating: u64,
    /// Number of verified trackers that are working.
    pub working: u64,
    /// Number of trackers failing on every local endpoint.
    pub not_working: u64,
    /// Number of trackers without a usable outcome yet.
    pub not_contacted: u64,
}

impl TrackerListMetrics {
    /// It counts one more tracker with the given status.
    pub fn count(&mut self, status: Status) {
        match status {
            Status::Updating => self.updating += 1,
            Status::Working => self.working += 1,
            Status::NotWorking => self.not_working += 1,
            Status::NotContacted => self.not_contacted += 1,
        }
    }

    /// Total number of trackers.
    #[must_use]
    pub fn trackers(&self) -> u64 {
        self.updating + self.working + self.not_working + self.not_contacted
    }
}

impl AddAssign for TrackerListMetrics {
    fn add_assign(&mut self, rhs: Self) {
        self.updating += rhs.updating;
        self.working += rhs.working;
        self.not_working += rhs.not_working;
        self.not_contacted += rhs.not_contacted;
    }
}

impl FromIterator<Status> for TrackerListMetrics {
    fn from_iter<T: IntoIterator<Item = Status>>(iter: T) -> Self {
        let mut metrics = Self::default();
        for status in iter {
            metrics.count(status);
        }
        metrics
    }
}
