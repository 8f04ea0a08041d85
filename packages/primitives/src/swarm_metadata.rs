use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use crate::scrape_count::ScrapeCount;

/// Swarm statistics for one torrent as seen by a tracker.
///
/// See [BEP 48: Tracker Protocol Extension: Scrape](https://www.bittorrent.org/beps/bep_0048.html)
///
/// Every counter can be unknown when the tracker didn't report it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Constructor, Serialize, Deserialize)]
pub struct SwarmMetadata {
    /// (i.e `completed`): The number of peers that have ever completed downloading
    pub downloaded: ScrapeCount,
    /// (i.e `seeders`): The number of active peers that have completed downloading (seeders)
    pub complete: ScrapeCount,
    /// (i.e `leechers`): The number of active peers that have not completed downloading (leechers)
    pub incomplete: ScrapeCount,
}

impl SwarmMetadata {
    /// Swarm metadata with every counter unknown.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// It keeps, for every counter independently, the best known value.
    ///
    /// Different local endpoints may see different slices of the same swarm
    /// (for example, one per address family). The result is the maximum, not
    /// the sum, because the same peer can be visible from several endpoints.
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        Self {
            downloaded: self.downloaded.best(other.downloaded),
            complete: self.complete.best(other.complete),
            incomplete: self.incomplete.best(other.incomplete),
        }
    }
}
