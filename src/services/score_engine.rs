//! Privacy score calculation.
//!
//! Reduces a session's tracker set to a 0-100 score. Each distinct tracker
//! subtracts its category penalty exactly once; hit counts do not affect
//! the score. Pure and order-independent.

use std::collections::HashMap;

use crate::types::tracker::{TrackerCategory, TrackerObservation};

/// Penalty applied once per distinct tracker of the category.
fn category_penalty(category: TrackerCategory) -> i32 {
    match category {
        TrackerCategory::Advertising => 3,
        TrackerCategory::Analytics => 2,
        TrackerCategory::Fingerprinting => 4,
        _ => 1,
    }
}

/// Computes the privacy score for a set of tracker observations.
/// Starts at 100 and clamps at 0.
pub fn privacy_score(trackers: &HashMap<String, TrackerObservation>) -> u8 {
    let penalties: i32 = trackers
        .values()
        .map(|observation| category_penalty(observation.category))
        .sum();
    (100 - penalties).max(0) as u8
}

/// Whether a score marks a tracking-heavy site under the configured
/// threshold.
pub fn is_heavy(score: u8, threshold: u8) -> bool {
    score < threshold
}
