//! Unit tests for the session store (request aggregation).
//!
//! Covers the aggregation contract: sentinel tab ids, first-party
//! rejection, unknown domains, hit counting, URL sampling, and lifecycle
//! resets.

use privacy_guardian::managers::session_store::{SessionStore, SessionStoreTrait};
use privacy_guardian::types::tracker::TrackerObservation;

const PAGE: &str = "https://example.com";

fn setup() -> SessionStore {
    SessionStore::new()
}

// ─── Rejection Paths ───

#[test]
fn negative_tab_id_never_creates_session() {
    let mut store = setup();
    let record = store.record_request(-1, "https://google-analytics.com/collect", Some(PAGE));
    assert!(record.is_none());
    assert!(store.get_session(-1).is_none());
    assert_eq!(store.session_count(), 0);
}

#[test]
fn first_party_request_is_ignored() {
    let mut store = setup();
    let record = store.record_request(1, "https://example.com/styles.css", Some(PAGE));
    assert!(record.is_none());
    assert!(store.get_session(1).is_none());
}

#[test]
fn missing_initiator_is_ignored() {
    let mut store = setup();
    let record = store.record_request(1, "https://google-analytics.com/collect", None);
    assert!(record.is_none());
    assert!(store.get_session(1).is_none());
}

#[test]
fn unknown_tracker_domain_is_ignored() {
    let mut store = setup();
    let record = store.record_request(1, "https://cdn.jsdelivr.net/npm/lib.js", Some(PAGE));
    assert!(record.is_none());
    assert!(store.get_session(1).is_none());
}

// ─── Aggregation ───

#[test]
fn matched_request_creates_session_and_observation() {
    let mut store = setup();
    let record = store
        .record_request(1, "https://www.google-analytics.com/analytics.js", Some(PAGE))
        .expect("expected a tracker match");

    assert_eq!(record.tab_id, 1);
    assert_eq!(record.tracker_domain, "google-analytics.com");
    assert_eq!(record.distinct_trackers, 1);

    let session = store.get_session(1).unwrap();
    assert!(session.page_url.is_none(), "page context arrives via navigation");
    let observation = &session.trackers["google-analytics.com"];
    assert_eq!(observation.name, "Google Analytics");
    assert_eq!(observation.hit_count, 1);
}

#[test]
fn repeated_hits_increment_count_without_duplicating_entry() {
    let mut store = setup();
    for i in 0..4 {
        store.record_request(
            1,
            &format!("https://google-analytics.com/collect?n={}", i),
            Some(PAGE),
        );
    }

    let session = store.get_session(1).unwrap();
    assert_eq!(session.distinct_tracker_count(), 1);
    assert_eq!(session.trackers["google-analytics.com"].hit_count, 4);
}

#[test]
fn subdomain_variants_aggregate_under_registry_domain() {
    let mut store = setup();
    store.record_request(1, "https://www.google-analytics.com/a.js", Some(PAGE));
    store.record_request(1, "https://ssl.google-analytics.com/b.js", Some(PAGE));

    let session = store.get_session(1).unwrap();
    assert_eq!(session.distinct_tracker_count(), 1);
    assert_eq!(session.trackers["google-analytics.com"].hit_count, 2);
}

#[test]
fn sampled_urls_dedup_and_cap_at_five() {
    let mut store = setup();
    let url = "https://google-analytics.com/collect";

    // Duplicate URL is sampled once.
    store.record_request(1, url, Some(PAGE));
    store.record_request(1, url, Some(PAGE));
    {
        let observation = &store.get_session(1).unwrap().trackers["google-analytics.com"];
        assert_eq!(observation.hit_count, 2);
        assert_eq!(observation.sampled_urls, vec![url.to_string()]);
    }

    // Unique URLs fill up to the cap, then stop.
    for i in 0..10 {
        store.record_request(
            1,
            &format!("https://google-analytics.com/collect?n={}", i),
            Some(PAGE),
        );
    }
    let observation = &store.get_session(1).unwrap().trackers["google-analytics.com"];
    assert_eq!(observation.hit_count, 12);
    assert_eq!(
        observation.sampled_urls.len(),
        TrackerObservation::MAX_SAMPLED_URLS
    );
}

#[test]
fn tabs_do_not_share_sessions() {
    let mut store = setup();
    store.record_request(1, "https://google-analytics.com/a.js", Some(PAGE));
    store.record_request(2, "https://connect.facebook.net/fbevents.js", Some(PAGE));

    assert_eq!(store.distinct_tracker_count(1), 1);
    assert_eq!(store.distinct_tracker_count(2), 1);
    assert!(store.get_session(1).unwrap().trackers.contains_key("google-analytics.com"));
    assert!(store.get_session(2).unwrap().trackers.contains_key("facebook.net"));
}

// ─── End-to-End Scenario ───

#[test]
fn mixed_request_stream_aggregates_correctly() {
    let mut store = setup();
    store.record_request(1, "https://google-analytics.com/collect?a", Some(PAGE));
    store.record_request(1, "https://google-analytics.com/collect?b", Some(PAGE));
    store.record_request(1, "https://connect.facebook.net/fbevents.js", Some(PAGE));
    store.record_request(1, "https://example.com/styles.css", Some(PAGE));

    let session = store.get_session(1).unwrap();
    assert_eq!(session.distinct_tracker_count(), 2);
    assert_eq!(session.trackers["google-analytics.com"].hit_count, 2);
    assert_eq!(session.trackers["facebook.net"].hit_count, 1);
}

// ─── Lifecycle ───

#[test]
fn reset_replaces_session_with_new_page_context() {
    let mut store = setup();
    store.record_request(1, "https://google-analytics.com/collect", Some(PAGE));
    assert_eq!(store.distinct_tracker_count(1), 1);

    store.reset_session(1, "https://news.example.org/front");
    let session = store.get_session(1).unwrap();
    assert_eq!(session.distinct_tracker_count(), 0);
    assert_eq!(session.page_url.as_deref(), Some("https://news.example.org/front"));
    assert_eq!(session.page_domain.as_deref(), Some("news.example.org"));
}

#[test]
fn reset_with_negative_tab_id_is_ignored() {
    let mut store = setup();
    store.reset_session(-1, "https://example.com");
    assert_eq!(store.session_count(), 0);
}

#[test]
fn destroy_removes_all_state_for_tab() {
    let mut store = setup();
    store.record_request(1, "https://google-analytics.com/collect", Some(PAGE));
    store.record_request(2, "https://hotjar.com/h.js", Some(PAGE));

    store.destroy_session(1);
    assert!(store.get_session(1).is_none());
    assert_eq!(store.distinct_tracker_count(1), 0);
    assert_eq!(store.session_count(), 1);
}

#[test]
fn destroy_unknown_tab_is_a_no_op() {
    let mut store = setup();
    store.destroy_session(42);
    assert_eq!(store.session_count(), 0);
}
