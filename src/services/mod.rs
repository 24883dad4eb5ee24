// Privacy Guardian stateless engines
// Services hold no per-tab state: domain parsing, registry lookup,
// third-party classification, scoring, and settings.

pub mod domain_utils;
pub mod request_classifier;
pub mod score_engine;
pub mod settings_engine;
pub mod tracker_registry;
