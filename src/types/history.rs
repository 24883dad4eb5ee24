use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tracker::TrackerObservation;

/// One recorded visit to a page domain: the trackers seen, the resulting
/// privacy score, and whether blocking was active (always false while
/// blocking is stubbed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteVisit {
    pub id: String,
    pub domain: String,
    pub privacy_score: u8,
    pub blocked: bool,
    pub trackers: HashMap<String, TrackerObservation>,
    pub page_url: Option<String>,
    pub timestamp: i64,
}
