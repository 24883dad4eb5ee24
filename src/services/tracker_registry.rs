//! Static tracker registry with suffix-match lookup.
//!
//! A simplified, embedded cut of the EasyPrivacy list. The table is never
//! updated at runtime; matching is deterministic first-match in table
//! order, not longest-match.

use crate::types::tracker::{TrackerCategory, TrackerDefinition};

/// Known tracker domains with display metadata, in insertion order.
pub const KNOWN_TRACKERS: &[TrackerDefinition] = &[
    TrackerDefinition {
        domain: "google-analytics.com",
        name: "Google Analytics",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "doubleclick.net",
        name: "DoubleClick",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "facebook.net",
        name: "Facebook",
        category: TrackerCategory::SocialMedia,
    },
    TrackerDefinition {
        domain: "facebook.com",
        name: "Facebook",
        category: TrackerCategory::SocialMedia,
    },
    TrackerDefinition {
        domain: "googlesyndication.com",
        name: "Google Ads",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "googletagmanager.com",
        name: "Google Tag Manager",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "hotjar.com",
        name: "Hotjar",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "amazon-adsystem.com",
        name: "Amazon Ads",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "scorecardresearch.com",
        name: "ScoreCard Research",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "twitter.com",
        name: "Twitter",
        category: TrackerCategory::SocialMedia,
    },
    TrackerDefinition {
        domain: "adnxs.com",
        name: "AppNexus",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "criteo.com",
        name: "Criteo",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "rubiconproject.com",
        name: "Rubicon Project",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "optimizely.com",
        name: "Optimizely",
        category: TrackerCategory::AbTesting,
    },
    TrackerDefinition {
        domain: "chartbeat.com",
        name: "Chartbeat",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "mixpanel.com",
        name: "Mixpanel",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "quantserve.com",
        name: "Quantcast",
        category: TrackerCategory::Analytics,
    },
    TrackerDefinition {
        domain: "outbrain.com",
        name: "Outbrain",
        category: TrackerCategory::Advertising,
    },
    TrackerDefinition {
        domain: "taboola.com",
        name: "Taboola",
        category: TrackerCategory::Advertising,
    },
];

/// Looks up a hostname against the registry.
///
/// Checks for an exact domain match first, then for the first entry the
/// hostname is a proper subdomain of. The suffix check requires a preceding
/// dot, so `mygoogle-analytics.com` does not match `google-analytics.com`,
/// and `doubleclick.net.malicious.com` matches nothing.
pub fn lookup(domain: &str) -> Option<&'static TrackerDefinition> {
    if let Some(definition) = KNOWN_TRACKERS.iter().find(|t| t.domain == domain) {
        return Some(definition);
    }
    KNOWN_TRACKERS.iter().find(|t| {
        domain
            .strip_suffix(t.domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
    })
}
