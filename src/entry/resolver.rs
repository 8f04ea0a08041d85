//! Reductions from the local endpoint states to the tracker state.
use torrust_tracker_status_primitives::status::Status;
use tracing::trace;

/// It reduces the statuses of the local endpoints, in registration order,
/// into one tracker status.
///
/// It scans the endpoints once, from left to right:
///
/// - The first `Updating` endpoint returns `Updating`. An announce in flight
///   means the other outcomes are about to be replaced.
/// - `NotWorking` endpoints are counted and skipped.
/// - Functioning endpoints are ignored until the tracker is `verified`. The
///   first functioning endpoint of a verified tracker returns `Working`.
///
/// When the scan ends the tracker is `NotWorking` if every endpoint failed
/// (and there is at least one), and `NotContacted` otherwise. `NotContacted`
/// covers both a tracker without endpoints and a tracker whose only successes
/// are not verified.
pub fn resolve_status<I>(verified: bool, statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    let mut total: usize = 0;
    let mut failed: usize = 0;

    for status in statuses {
        total += 1;

        match status {
            Status::Updating => return Status::Updating,
            Status::NotWorking => failed += 1,
            Status::Working if verified => return Status::Working,
            Status::Working | Status::NotContacted => {}
        }
    }

    trace!(total, failed, verified, "no endpoint is updating or verified working");

    if failed == total && total != 0 {
        return Status::NotWorking;
    }

    Status::NotContacted
}

/// It collects the non-empty trimmed texts, without duplicates, keeping the
/// first occurrence order.
pub fn collect_messages<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // Only a few messages per tracker, a `Vec` lookup is enough.
    let mut messages: Vec<String> = Vec::new();

    for text in texts {
        let message = text.trim();

        if !message.is_empty() && !messages.iter().any(|m| m == message) {
            messages.push(message.to_owned());
        }
    }

    messages
}
