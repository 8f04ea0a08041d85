use serde::{Deserialize, Serialize};
use torrust_tracker_status_primitives::Tier;

/// Core configuration for the tracker list of a torrent.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    /// The tier given to a tracker added without an explicit tier.
    /// Lower tiers are announced to first. Default is `0`.
    #[serde(default = "Core::default_default_tier")]
    pub default_tier: Tier,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            default_tier: Self::default_default_tier(),
        }
    }
}

impl Core {
    fn default_default_tier() -> Tier {
        0
    }
}
