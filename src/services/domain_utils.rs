//! Domain utilities: hostname extraction and the registrable-domain heuristic.
//!
//! `registrable_domain` is a two-label heuristic, not a Public Suffix List
//! lookup: `sub.example.co.uk` reduces to `co.uk`, which is wrong for
//! multi-part suffixes. Known limitation.

use url::Url;

/// Extracts the hostname from a URL.
///
/// Fails soft: input that does not parse as a URL, or that parses without a
/// host (`data:`, `mailto:`), is returned unchanged. Downstream matching
/// then simply finds no tracker.
pub fn extract_hostname(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

/// Reduces a hostname to its last two dot-separated labels.
///
/// Hostnames with two or fewer labels are returned unchanged.
pub fn registrable_domain(hostname: &str) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() > 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        hostname.to_string()
    }
}
