//! Third-party request classification.
//!
//! A request is third-party when its registrable domain differs from the
//! initiating page's. Comparison is by registrable domain, not full
//! hostname: `cdn.example.com` loaded from `www.example.com` is
//! first-party.

use crate::services::domain_utils::{extract_hostname, registrable_domain};

/// Returns true when the request targets a different registrable domain
/// than its initiator.
///
/// Fails closed: a missing request URL or initiator classifies as
/// first-party, so under-detection is preferred over false positives.
pub fn is_third_party(request_url: Option<&str>, initiator_url: Option<&str>) -> bool {
    let (Some(request_url), Some(initiator_url)) = (request_url, initiator_url) else {
        return false;
    };
    let target = registrable_domain(&extract_hostname(request_url));
    let initiator = registrable_domain(&extract_hostname(initiator_url));
    target != initiator
}
