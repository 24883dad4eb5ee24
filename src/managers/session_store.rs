//! Session store: per-tab tracker aggregation.
//!
//! Owns every live `TabSession` keyed by tab id and applies the aggregation
//! contract to observed requests. The store itself performs no I/O; badge
//! and persistence side effects are driven by the caller from the returned
//! `RequestRecord`.

use std::collections::HashMap;

use crate::services::domain_utils::extract_hostname;
use crate::services::request_classifier::is_third_party;
use crate::services::tracker_registry;
use crate::types::session::{RequestRecord, TabSession};
use crate::types::tracker::TrackerObservation;

/// Trait defining the request aggregation interface.
pub trait SessionStoreTrait {
    fn record_request(
        &mut self,
        tab_id: i64,
        request_url: &str,
        initiator_url: Option<&str>,
    ) -> Option<RequestRecord>;
    fn reset_session(&mut self, tab_id: i64, new_url: &str);
    fn destroy_session(&mut self, tab_id: i64);
    fn get_session(&self, tab_id: i64) -> Option<&TabSession>;
    fn distinct_tracker_count(&self, tab_id: i64) -> usize;
    fn session_count(&self) -> usize;
}

/// In-memory session store; one exclusively-owned `TabSession` per tab.
///
/// All mutation happens synchronously on the event-processing thread, so
/// no locking is needed.
pub struct SessionStore {
    sessions: HashMap<i64, TabSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStoreTrait for SessionStore {
    /// Records one observed request against its tab.
    ///
    /// No-ops, returning `None`, for the background-request sentinel
    /// (`tab_id < 0`, which must never create session state), for
    /// first-party requests, and for target domains not in the registry.
    /// Otherwise increments the matched tracker's hit count, samples up to
    /// five unique URLs, and reports the distinct-tracker count so the
    /// caller can update the badge and persist the session.
    fn record_request(
        &mut self,
        tab_id: i64,
        request_url: &str,
        initiator_url: Option<&str>,
    ) -> Option<RequestRecord> {
        if tab_id < 0 {
            return None;
        }
        if !is_third_party(Some(request_url), initiator_url) {
            return None;
        }

        let target_domain = extract_hostname(request_url);
        let definition = tracker_registry::lookup(&target_domain)?;
        log::debug!(
            "tracker found -> {} ({}, {})",
            target_domain,
            definition.name,
            definition.category
        );

        let session = self
            .sessions
            .entry(tab_id)
            .or_insert_with(|| TabSession::empty(tab_id));

        // Observations are keyed by the matched registry domain, so all
        // subdomain variants of one tracker aggregate into a single entry.
        let observation = session
            .trackers
            .entry(definition.domain.to_string())
            .or_insert_with(|| TrackerObservation::new(definition));

        observation.hit_count += 1;
        if observation.sampled_urls.len() < TrackerObservation::MAX_SAMPLED_URLS
            && !observation.sampled_urls.iter().any(|u| u == request_url)
        {
            observation.sampled_urls.push(request_url.to_string());
        }

        Some(RequestRecord {
            tab_id,
            tracker_domain: definition.domain.to_string(),
            distinct_trackers: session.trackers.len(),
        })
    }

    /// Replaces the tab's session wholesale when it begins loading a new
    /// top-level document: empty trackers map, new page URL and domain.
    fn reset_session(&mut self, tab_id: i64, new_url: &str) {
        if tab_id < 0 {
            return;
        }
        let page_domain = extract_hostname(new_url);
        self.sessions
            .insert(tab_id, TabSession::for_page(tab_id, new_url, &page_domain));
    }

    /// Removes the tab's session entirely. No state remains keyed by a
    /// closed tab id.
    fn destroy_session(&mut self, tab_id: i64) {
        self.sessions.remove(&tab_id);
    }

    fn get_session(&self, tab_id: i64) -> Option<&TabSession> {
        self.sessions.get(&tab_id)
    }

    /// Distinct-tracker count for the tab, derived from the trackers map.
    /// Returns 0 for tabs without a session.
    fn distinct_tracker_count(&self, tab_id: i64) -> usize {
        self.sessions
            .get(&tab_id)
            .map_or(0, TabSession::distinct_tracker_count)
    }

    fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
