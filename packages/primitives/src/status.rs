//! Tracker status.
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The connectivity status of a tracker, or of one of its local endpoints.
///
/// Local endpoints only report `Updating`, `Working` or `NotWorking`.
/// `NotContacted` only exists for the tracker as a whole.
#[derive(Hash, Clone, Copy, Debug, Default, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// An announce request is in flight. The previous outcome is stale.
    #[display("Updating...")]
    Updating,
    /// The tracker answered successfully and it has been verified.
    #[display("Working")]
    Working,
    /// Every local endpoint failed in its last announce.
    #[display("Not working")]
    NotWorking,
    /// There is no usable outcome yet.
    #[default]
    #[display("Not contacted yet")]
    NotContacted,
}
