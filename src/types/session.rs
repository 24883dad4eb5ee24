use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tracker::TrackerObservation;

/// Per-tab aggregation record of trackers observed since the last navigation.
///
/// `page_url`/`page_domain` stay unset until a navigation event populates
/// them; requests observed before that still aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSession {
    pub tab_id: i64,
    pub page_url: Option<String>,
    pub page_domain: Option<String>,
    pub trackers: HashMap<String, TrackerObservation>,
}

impl TabSession {
    /// An empty session with no page context. Also serves as the
    /// empty-trackers placeholder returned for unknown tabs.
    pub fn empty(tab_id: i64) -> Self {
        Self {
            tab_id,
            page_url: None,
            page_domain: None,
            trackers: HashMap::new(),
        }
    }

    /// A fresh session for a tab that started loading `page_url`.
    pub fn for_page(tab_id: i64, page_url: &str, page_domain: &str) -> Self {
        Self {
            tab_id,
            page_url: Some(page_url.to_string()),
            page_domain: Some(page_domain.to_string()),
            trackers: HashMap::new(),
        }
    }

    /// Number of distinct tracker domains seen on this session.
    /// This is the authoritative badge count.
    pub fn distinct_tracker_count(&self) -> usize {
        self.trackers.len()
    }
}

/// Outcome of a successfully recorded request, handed back to the caller
/// to drive badge and persistence side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub tab_id: i64,
    pub tracker_domain: String,
    pub distinct_trackers: usize,
}
