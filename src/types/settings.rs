use serde::{Deserialize, Serialize};

/// User-tunable settings for the tracker monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardianSettings {
    /// A visit scoring below this counts as a tracking-heavy site.
    pub heavy_site_threshold: u8,
    /// Most recent visits kept per page domain in tracker history.
    pub history_per_domain: usize,
    /// Blocking toggle. Requests are observed, never blocked, in this
    /// version; the flag is recorded for the UI.
    pub blocking_enabled: bool,
}

impl Default for GuardianSettings {
    fn default() -> Self {
        Self {
            heavy_site_threshold: 90,
            history_per_domain: 10,
            blocking_enabled: false,
        }
    }
}
