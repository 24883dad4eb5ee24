//! Unit tests for the tracker registry.
//!
//! Covers exact matches, subdomain matches, look-alike rejection, and the
//! suffix-in-substring trick.

use rstest::rstest;

use privacy_guardian::services::tracker_registry::{lookup, KNOWN_TRACKERS};
use privacy_guardian::types::tracker::TrackerCategory;

// ─── Matching ───

#[rstest]
#[case("google-analytics.com", "Google Analytics")]
#[case("facebook.net", "Facebook")]
#[case("doubleclick.net", "DoubleClick")]
#[case("optimizely.com", "Optimizely")]
fn exact_domain_matches(#[case] domain: &str, #[case] expected_name: &str) {
    let definition = lookup(domain).expect("expected a registry match");
    assert_eq!(definition.name, expected_name);
}

#[rstest]
#[case("www.google-analytics.com", "Google Analytics")]
#[case("static.doubleclick.net", "DoubleClick")]
#[case("connect.facebook.net", "Facebook")]
#[case("cdn.mxpnl.mixpanel.com", "Mixpanel")]
fn subdomain_matches(#[case] domain: &str, #[case] expected_name: &str) {
    let definition = lookup(domain).expect("expected a registry match");
    assert_eq!(definition.name, expected_name);
}

#[rstest]
#[case("example.com")]
#[case("google.com")]
#[case("analytics-platform.com")]
fn unknown_domains_do_not_match(#[case] domain: &str) {
    assert!(lookup(domain).is_none());
}

// ─── Edge Cases ───

#[test]
fn look_alike_domain_does_not_match() {
    // Suffix check requires a preceding dot.
    assert!(lookup("mygoogle-analytics.com").is_none());
}

#[test]
fn suffix_in_substring_does_not_match() {
    assert!(lookup("doubleclick.net.malicious.com").is_none());
}

#[test]
fn empty_domain_does_not_match() {
    assert!(lookup("").is_none());
}

// ─── Registry Contents ───

#[test]
fn categories_are_assigned() {
    assert_eq!(
        lookup("google-analytics.com").unwrap().category,
        TrackerCategory::Analytics
    );
    assert_eq!(
        lookup("doubleclick.net").unwrap().category,
        TrackerCategory::Advertising
    );
    assert_eq!(
        lookup("facebook.net").unwrap().category,
        TrackerCategory::SocialMedia
    );
    assert_eq!(
        lookup("optimizely.com").unwrap().category,
        TrackerCategory::AbTesting
    );
}

#[test]
fn facebook_net_and_com_are_distinct_entries() {
    // Same display name, different canonical domains.
    let net = lookup("facebook.net").unwrap();
    let com = lookup("facebook.com").unwrap();
    assert_eq!(net.name, com.name);
    assert_ne!(net.domain, com.domain);
}

#[test]
fn first_match_follows_table_order() {
    // The winner for a multi-candidate domain is the first table entry,
    // not the longest suffix.
    let first = KNOWN_TRACKERS
        .iter()
        .find(|t| "www.google-analytics.com".ends_with(t.domain))
        .unwrap();
    assert_eq!(lookup("www.google-analytics.com").unwrap().domain, first.domain);
}
