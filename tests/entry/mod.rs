use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use rstest::{fixture, rstest};
use torrust_tracker_status::endpoint::EndpointState;
use torrust_tracker_status::{EntryMutexParkingLot, EntryMutexStd, EntryRwLockParkingLot, EntrySingle};
use torrust_tracker_status_primitives::scrape_count::ScrapeCount;
use torrust_tracker_status_primitives::status::Status;
use tracing::level_filters::LevelFilter;

use crate::common::endpoint_state_builder::{
    a_failing_endpoint, a_fresh_endpoint, a_functioning_endpoint, a_negotiating_endpoint, a_rejected_endpoint,
    an_endpoint_with_counters,
};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::common::tracker::Tracker;

const URL: &str = "udp://tracker.example:6969/announce";

#[fixture]
fn single() -> Tracker {
    Tracker::Single(EntrySingle::new(URL, 0))
}

#[fixture]
fn mutex_std() -> Tracker {
    Tracker::MutexStd(EntrySingle::new(URL, 0).into())
}

#[fixture]
fn mutex_parking_lot() -> Tracker {
    Tracker::MutexParkingLot(EntrySingle::new(URL, 0).into())
}

#[fixture]
fn rw_lock_parking_lot() -> Tracker {
    Tracker::RwLockParkingLot(EntrySingle::new(URL, 0).into())
}

pub enum Makes {
    Empty,
    Negotiating,
    Functioning,
    Failing,
    FailingThenFunctioning,
    FunctioningThenNegotiating,
    Three,
}

fn make(tracker: &mut Tracker, makes: &Makes) -> Vec<EndpointState> {
    let endpoints = match makes {
        Makes::Empty => vec![],
        Makes::Negotiating => vec![a_negotiating_endpoint("10.0.0.1:6881")],
        Makes::Functioning => vec![a_functioning_endpoint("10.0.0.1:6881")],
        Makes::Failing => vec![
            a_failing_endpoint("10.0.0.1:6881", "timeout"),
            a_failing_endpoint("[fe80::1]:6881", "refused"),
        ],
        Makes::FailingThenFunctioning => vec![
            a_failing_endpoint("10.0.0.1:6881", "timeout"),
            a_functioning_endpoint("[fe80::1]:6881"),
        ],
        Makes::FunctioningThenNegotiating => vec![
            a_functioning_endpoint("10.0.0.1:6881"),
            a_negotiating_endpoint("[fe80::1]:6881"),
        ],
        Makes::Three => vec![
            a_failing_endpoint("10.0.0.1:6881", "timeout"),
            a_negotiating_endpoint("[fe80::1]:6881"),
            a_functioning_endpoint("192.168.1.10:6881"),
        ],
    };

    for endpoint in &endpoints {
        tracker.upsert_endpoint(endpoint.clone());
    }

    endpoints
}

#[rstest]
#[case::empty(&Makes::Empty)]
fn it_should_be_empty_and_not_verified_by_default(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
    #[case] makes: &Makes,
) {
    make(&mut tracker, makes);

    assert_eq!(tracker.get_endpoints_len(), 0);
    assert!(!tracker.is_verified());
    assert_eq!(tracker.status(), Status::NotContacted);
    assert!(tracker.messages().is_empty());
}

#[rstest]
#[case::empty(&Makes::Empty)]
#[case::negotiating(&Makes::Negotiating)]
#[case::functioning(&Makes::Functioning)]
#[case::failing(&Makes::Failing)]
#[case::failing_then_functioning(&Makes::FailingThenFunctioning)]
#[case::functioning_then_negotiating(&Makes::FunctioningThenNegotiating)]
#[case::three(&Makes::Three)]
fn it_should_resolve_the_status_of_a_verified_tracker(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
    #[case] makes: &Makes,
) {
    tracker.set_verified();
    make(&mut tracker, makes);

    let expected = match makes {
        Makes::Empty => Status::NotContacted,
        Makes::Negotiating | Makes::Three => Status::Updating,
        // the first verified working endpoint returns before the negotiating one is reached
        Makes::Functioning | Makes::FailingThenFunctioning | Makes::FunctioningThenNegotiating => Status::Working,
        Makes::Failing => Status::NotWorking,
    };

    assert_eq!(tracker.status(), expected);
}

#[rstest]
#[case::empty(&Makes::Empty)]
#[case::negotiating(&Makes::Negotiating)]
#[case::functioning(&Makes::Functioning)]
#[case::failing(&Makes::Failing)]
#[case::failing_then_functioning(&Makes::FailingThenFunctioning)]
#[case::functioning_then_negotiating(&Makes::FunctioningThenNegotiating)]
#[case::three(&Makes::Three)]
fn it_should_resolve_the_status_of_a_tracker_that_is_not_verified(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
    #[case] makes: &Makes,
) {
    make(&mut tracker, makes);

    let expected = match makes {
        Makes::Empty | Makes::Functioning | Makes::FailingThenFunctioning => Status::NotContacted,
        Makes::Negotiating | Makes::FunctioningThenNegotiating | Makes::Three => Status::Updating,
        Makes::Failing => Status::NotWorking,
    };

    assert_eq!(tracker.status(), expected);
}

#[rstest]
#[case::empty(&Makes::Empty)]
#[case::negotiating(&Makes::Negotiating)]
#[case::functioning(&Makes::Functioning)]
#[case::failing(&Makes::Failing)]
#[case::three(&Makes::Three)]
fn it_should_keep_the_endpoints_in_registration_order(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
    #[case] makes: &Makes,
) {
    let endpoints = make(&mut tracker, makes);

    assert_eq!(tracker.endpoints(), endpoints);
    assert_eq!(tracker.get_endpoints_len(), endpoints.len());
}

#[rstest]
fn a_tracker_whose_endpoints_have_never_announced_should_not_be_contacted_yet(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    tracker.upsert_endpoint(a_fresh_endpoint("0.0.0.0:6881"));
    tracker.upsert_endpoint(a_fresh_endpoint("[::]:6881"));

    assert_eq!(tracker.status(), Status::NotContacted);
    assert!(tracker.messages().is_empty());
}

#[rstest]
fn the_last_errors_should_be_the_messages_of_a_tracker_not_working(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    tracker.set_verified();
    make(&mut tracker, &Makes::Failing);

    assert_eq!(tracker.status(), Status::NotWorking);
    assert_eq!(tracker.messages(), vec!["timeout".to_owned(), "refused".to_owned()]);
}

#[rstest]
fn the_last_errors_should_not_be_the_messages_of_a_tracker_that_is_updating(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    make(&mut tracker, &Makes::Three);

    assert_eq!(tracker.status(), Status::Updating);
    assert!(tracker.messages().is_empty());
}

#[rstest]
fn the_tracker_messages_should_be_trimmed_and_deduplicated_in_endpoint_order(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    tracker.upsert_endpoint(a_rejected_endpoint("a", "  torrent not registered"));
    tracker.upsert_endpoint(a_rejected_endpoint("b", "slow down"));
    tracker.upsert_endpoint(a_rejected_endpoint("c", "torrent not registered "));
    tracker.upsert_endpoint(a_rejected_endpoint("d", "   "));

    assert_eq!(tracker.status(), Status::NotWorking);
    assert_eq!(
        tracker.messages(),
        vec!["torrent not registered".to_owned(), "slow down".to_owned()]
    );
}

#[rstest]
#[case::seeders_known_once(&[(-1, 0, 0), (3, 0, 0), (-1, 0, 0)], 3)]
#[case::seeders_never_known(&[(-1, 0, 0), (-1, 0, 0)], -1)]
#[case::seeders_zero_is_known(&[(-1, 0, 0), (0, 0, 0)], 0)]
#[case::seeders_biggest_wins(&[(5, 0, 0), (2, 0, 0), (9, 0, 0)], 9)]
fn the_seeders_should_be_the_best_known_value(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
    #[case] counters: &[(i64, i64, i64)],
    #[case] expected: i64,
) {
    for (index, (seeders, leechers, downloaded)) in counters.iter().enumerate() {
        tracker.upsert_endpoint(an_endpoint_with_counters(
            &format!("10.0.0.{index}:6881"),
            *seeders,
            *leechers,
            *downloaded,
        ));
    }

    assert_eq!(tracker.get_swarm_metadata().complete.to_i64(), expected);
}

#[rstest]
fn every_swarm_counter_should_be_reduced_independently(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    tracker.upsert_endpoint(an_endpoint_with_counters("a", 10, -1, 2));
    tracker.upsert_endpoint(an_endpoint_with_counters("b", 4, 7, -1));

    let swarm_metadata = tracker.get_swarm_metadata();

    assert_eq!(swarm_metadata.complete, ScrapeCount::new(10));
    assert_eq!(swarm_metadata.incomplete, ScrapeCount::new(7));
    assert_eq!(swarm_metadata.downloaded, ScrapeCount::new(2));
}

#[rstest]
fn the_swarm_counters_should_be_unknown_without_endpoints(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] tracker: Tracker,
) {
    let swarm_metadata = tracker.get_swarm_metadata();

    assert_eq!(swarm_metadata.complete.to_i64(), -1);
    assert_eq!(swarm_metadata.incomplete.to_i64(), -1);
    assert_eq!(swarm_metadata.downloaded.to_i64(), -1);
}

#[rstest]
fn an_updated_endpoint_should_keep_its_position(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    tracker.set_verified();
    make(&mut tracker, &Makes::Failing);

    let was_new = tracker.upsert_endpoint(a_functioning_endpoint("10.0.0.1:6881"));

    assert!(!was_new);
    assert_eq!(tracker.get_endpoints_len(), 2);
    assert_eq!(tracker.endpoints()[0], a_functioning_endpoint("10.0.0.1:6881"));
    assert_eq!(tracker.status(), Status::Working);
}

#[rstest]
fn a_torn_down_endpoint_should_no_longer_be_reduced(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    make(&mut tracker, &Makes::Three);

    let removed = tracker.remove_endpoint("[fe80::1]:6881");

    assert_eq!(removed, Some(a_negotiating_endpoint("[fe80::1]:6881")));
    assert_eq!(tracker.get_endpoints_len(), 2);
    assert_eq!(tracker.status(), Status::NotContacted);
    assert_eq!(tracker.remove_endpoint("[fe80::1]:6881"), None);
}

#[rstest]
fn a_verified_tracker_should_stay_verified(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    tracker.set_verified();
    make(&mut tracker, &Makes::Failing);
    tracker.set_verified();

    assert!(tracker.is_verified());
    assert_eq!(tracker.status(), Status::NotWorking);
}

#[rstest]
fn the_snapshot_should_be_the_same_tracker(
    #[values(single(), mutex_std(), mutex_parking_lot(), rw_lock_parking_lot())] mut tracker: Tracker,
) {
    make(&mut tracker, &Makes::Three);
    tracker.set_tier(2);

    let snapshot = tracker.snapshot();

    assert_eq!(tracker.tier(), 2);
    assert_eq!(snapshot, EntrySingle::new(URL, 2));
    assert_ne!(snapshot, EntrySingle::new(URL, 0));
}

fn hash_of(entry: &EntrySingle) -> u64 {
    let mut hasher = DefaultHasher::new();
    entry.hash(&mut hasher);
    hasher.finish()
}

#[rstest]
#[case::same_text(URL, URL, true)]
#[case::scheme_and_host_case(URL, "UDP://TRACKER.example:6969/announce", true)]
#[case::surrounding_whitespace(URL, " udp://tracker.example:6969/announce ", true)]
#[case::default_http_port("http://a.example/announce", "http://a.example:80/announce", true)]
#[case::other_path(URL, "udp://tracker.example:6969/scrape", false)]
#[case::other_port(URL, "udp://tracker.example:1337/announce", false)]
fn two_trackers_in_the_same_tier_should_be_equal_when_their_normalized_urls_are(
    #[case] url: &str,
    #[case] other_url: &str,
    #[case] equal: bool,
) {
    let entry = EntrySingle::new(url, 0);
    let other = EntrySingle::new(other_url, 0);

    assert_eq!(entry == other, equal);

    if equal {
        assert_eq!(hash_of(&entry), hash_of(&other));
    }
}

#[test]
fn a_shared_tracker_should_be_updated_and_read_from_many_threads() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let entries = [
        Tracker::MutexStd(EntryMutexStd::from(EntrySingle::new(URL, 0))),
        Tracker::MutexParkingLot(EntryMutexParkingLot::from(EntrySingle::new(URL, 0))),
        Tracker::RwLockParkingLot(EntryRwLockParkingLot::from(EntrySingle::new(URL, 0))),
    ];

    for tracker in entries {
        let writers: Vec<_> = (0..4)
            .map(|index| {
                let mut tracker = tracker.clone();
                thread::spawn(move || {
                    tracker.upsert_endpoint(an_endpoint_with_counters(&format!("10.0.0.{index}:6881"), index, 0, 0));
                })
            })
            .collect();

        for writer in writers {
            writer.join().expect("it should join the writer");
        }

        assert_eq!(tracker.get_endpoints_len(), 4);
        assert_eq!(tracker.get_swarm_metadata().complete, ScrapeCount::new(3));
    }
}
