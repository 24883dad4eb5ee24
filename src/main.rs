//! Privacy Guardian — tracker detection and per-tab privacy scoring core.
//!
//! Entry point: runs an interactive console demo feeding a scripted browsing
//! scenario through the full pipeline (classification, aggregation, scoring,
//! persistence) and printing what the popup and dashboard would show.

use std::sync::Arc;

use privacy_guardian::app::{App, BadgeSink};
use privacy_guardian::database::connection::Database;
use privacy_guardian::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use privacy_guardian::managers::session_store::SessionStoreTrait;
use privacy_guardian::services::score_engine;
use privacy_guardian::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use privacy_guardian::types::badge::BadgeState;

/// Badge sink that prints updates the way the extension shell would paint
/// them.
struct ConsoleBadge;

impl BadgeSink for ConsoleBadge {
    fn set_badge(&mut self, tab_id: i64, state: &BadgeState) {
        let text = if state.text.is_empty() { "(empty)" } else { &state.text };
        println!("  [badge] tab {} -> {} {}", tab_id, text, state.color.hex());
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn main() {
    println!();
    println!(
        "Privacy Guardian core v{} — demo mode",
        env!("CARGO_PKG_VERSION")
    );
    println!();

    let db = Arc::new(Database::open_in_memory().expect("failed to open in-memory database"));
    let settings_path = std::env::temp_dir().join("privacy-guardian-demo-settings.json");
    let mut settings_engine =
        SettingsEngine::new(Some(settings_path.to_string_lossy().to_string()));
    settings_engine.load().expect("failed to load settings");

    let mut app = App::with_parts(db, settings_engine);
    app.set_badge_sink(Box::new(ConsoleBadge));

    section("Browsing scenario");
    println!("  tab 1 navigates to https://news.example.com/front-page");
    app.handle_navigation(1, "https://news.example.com/front-page");

    let requests = [
        "https://www.google-analytics.com/analytics.js",
        "https://www.google-analytics.com/collect?v=1",
        "https://connect.facebook.net/en_US/fbevents.js",
        "https://static.doubleclick.net/instream/ad_status.js",
        "https://news.example.com/styles.css",
        "https://cdn.mixpanel.com/mixpanel.js",
    ];
    for url in requests {
        println!("  request: {}", url);
        app.handle_request(1, url, Some("https://news.example.com/front-page"));
    }

    section("Popup view (tab 1)");
    let session = app.get_tracking_data(1);
    println!(
        "  {} — {} trackers detected",
        session.page_domain.as_deref().unwrap_or("Unknown"),
        session.distinct_tracker_count()
    );
    for tracker in session.trackers.values() {
        println!(
            "    {} [{}] requests: {} sampled urls: {}",
            tracker.name,
            tracker.category,
            tracker.hit_count,
            tracker.sampled_urls.len()
        );
    }
    println!(
        "  privacy score: {}/100",
        score_engine::privacy_score(&session.trackers)
    );

    section("Dashboard view");
    {
        let settings = app.settings_engine.get_settings().clone();
        let history = HistoryManager::new(app.db.connection(), settings.history_per_domain);
        let average = history
            .average_score()
            .expect("failed to read history")
            .unwrap_or(100);
        println!("  average privacy score: {}/100", average);
        println!(
            "  heavy-site threshold: {} (configurable)",
            settings.heavy_site_threshold
        );
    }

    section("Tab lifecycle");
    println!("  tab 1 renavigates, then closes");
    app.handle_navigation(1, "https://other.example.org/");
    app.handle_tab_removed(1);
    println!(
        "  live sessions after close: {}",
        app.session_store.session_count()
    );
    println!(
        "  query after close returns placeholder with {} trackers",
        app.get_tracking_data(1).distinct_tracker_count()
    );

    println!();
    println!("Demo complete.");
}
