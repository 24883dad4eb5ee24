use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of tracking a known tracker performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackerCategory {
    Analytics,
    Advertising,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "A/B Testing")]
    AbTesting,
    Fingerprinting,
    Other,
}

impl fmt::Display for TrackerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerCategory::Analytics => write!(f, "Analytics"),
            TrackerCategory::Advertising => write!(f, "Advertising"),
            TrackerCategory::SocialMedia => write!(f, "Social Media"),
            TrackerCategory::AbTesting => write!(f, "A/B Testing"),
            TrackerCategory::Fingerprinting => write!(f, "Fingerprinting"),
            TrackerCategory::Other => write!(f, "Other"),
        }
    }
}

/// A known tracker: canonical registrable domain plus display metadata.
///
/// The registry table is embedded at compile time, so all fields are
/// static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerDefinition {
    pub domain: &'static str,
    pub name: &'static str,
    pub category: TrackerCategory,
}

/// Per-tab accumulation for one matched tracker domain.
///
/// Created on first match and mutated only by the session store; removed
/// only when the owning session is reset or destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerObservation {
    pub name: String,
    pub category: TrackerCategory,
    pub hit_count: u32,
    pub sampled_urls: Vec<String>,
}

impl TrackerObservation {
    /// Upper bound on unique URLs sampled per tracker. Once reached, no
    /// further URLs are stored even if later ones are unique.
    pub const MAX_SAMPLED_URLS: usize = 5;

    /// Creates a zero-hit observation from a registry definition.
    pub fn new(definition: &TrackerDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            category: definition.category,
            hit_count: 0,
            sampled_urls: Vec::new(),
        }
    }
}
