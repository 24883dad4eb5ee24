//! App core for Privacy Guardian.
//!
//! Central struct wiring the session store, database, settings, and badge
//! sink, and exposing the event-feed handlers the extension shell calls:
//! request observation, navigation, tab removal, and the tracking-data
//! query. Events are handled to completion on a single thread.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::session_store::{SessionStore, SessionStoreTrait};
use crate::managers::snapshot_store::{SnapshotStore, SnapshotStoreTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::badge::BadgeState;
use crate::types::session::TabSession;

/// Sink for rendering the per-tab badge; implemented by the extension
/// shell.
pub trait BadgeSink {
    fn set_badge(&mut self, tab_id: i64, state: &BadgeState);
}

/// Badge sink that drops updates; used when no shell is attached.
pub struct NoopBadgeSink;

impl BadgeSink for NoopBadgeSink {
    fn set_badge(&mut self, _tab_id: i64, _state: &BadgeState) {}
}

/// Central application struct.
///
/// HistoryManager and SnapshotStore are created on demand via
/// `db.connection()` because they borrow the connection with a lifetime
/// parameter.
pub struct App {
    pub db: Arc<Database>,
    pub session_store: SessionStore,
    pub settings_engine: SettingsEngine,
    badge_sink: Box<dyn BadgeSink>,
}

impl App {
    /// Creates a new App backed by a database file, loading settings from
    /// the default config path.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let mut settings_engine = SettingsEngine::new(None);
        settings_engine.load()?;
        Ok(Self::with_parts(db, settings_engine))
    }

    /// Assembles an App from an already-open database and settings engine.
    /// The caller is responsible for having loaded the settings.
    pub fn with_parts(db: Arc<Database>, settings_engine: SettingsEngine) -> Self {
        Self {
            db,
            session_store: SessionStore::new(),
            settings_engine,
            badge_sink: Box::new(NoopBadgeSink),
        }
    }

    /// Replaces the badge sink with the shell's implementation.
    pub fn set_badge_sink(&mut self, sink: Box<dyn BadgeSink>) {
        self.badge_sink = sink;
    }

    /// Request observation feed: one outgoing sub-resource request.
    ///
    /// On a tracker match, pushes the tab's badge state, upserts the
    /// durable session snapshot, and records tracker history. Storage
    /// failures are logged and dropped so request processing never blocks
    /// on persistence; a later write for the same tab overwrites a stale
    /// one.
    pub fn handle_request(&mut self, tab_id: i64, request_url: &str, initiator_url: Option<&str>) {
        let Some(record) = self
            .session_store
            .record_request(tab_id, request_url, initiator_url)
        else {
            return;
        };

        self.badge_sink
            .set_badge(tab_id, &BadgeState::for_count(record.distinct_trackers));

        let Some(session) = self.session_store.get_session(tab_id) else {
            return;
        };
        let conn = self.db.connection();
        if let Err(e) = SnapshotStore::new(conn).save(session) {
            log::warn!("snapshot write failed for tab {}: {}", tab_id, e);
        }

        let settings = self.settings_engine.get_settings();
        let mut history = HistoryManager::new(conn, settings.history_per_domain);
        if let Err(e) = history.record_visit(session, settings.heavy_site_threshold) {
            log::warn!(
                "history write failed for {}: {}",
                session.page_domain.as_deref().unwrap_or("<no page>"),
                e
            );
        }
    }

    /// Navigation feed: the tab began loading a new top-level document.
    ///
    /// Replaces the session wholesale, clears the badge, and persists the
    /// fresh snapshot, overriding any stale pending write from the prior
    /// page load.
    pub fn handle_navigation(&mut self, tab_id: i64, new_url: &str) {
        if tab_id < 0 {
            return;
        }
        self.session_store.reset_session(tab_id, new_url);
        self.badge_sink.set_badge(tab_id, &BadgeState::cleared());

        if let Some(session) = self.session_store.get_session(tab_id) {
            if let Err(e) = SnapshotStore::new(self.db.connection()).save(session) {
                log::warn!("snapshot write failed for tab {}: {}", tab_id, e);
            }
        }
    }

    /// Tab-closed feed: destroys the session and deletes its snapshot.
    /// Nothing remains keyed by the closed tab id.
    pub fn handle_tab_removed(&mut self, tab_id: i64) {
        self.session_store.destroy_session(tab_id);
        if let Err(e) = SnapshotStore::new(self.db.connection()).delete(tab_id) {
            log::warn!("snapshot delete failed for tab {}: {}", tab_id, e);
        }
    }

    /// Query interface for the popup: the live session if present, else the
    /// durable snapshot, else an empty-trackers placeholder.
    pub fn get_tracking_data(&self, tab_id: i64) -> TabSession {
        if let Some(session) = self.session_store.get_session(tab_id) {
            return session.clone();
        }
        match SnapshotStore::new(self.db.connection()).load(tab_id) {
            Ok(Some(session)) => session,
            Ok(None) => TabSession::empty(tab_id),
            Err(e) => {
                log::warn!("snapshot read failed for tab {}: {}", tab_id, e);
                TabSession::empty(tab_id)
            }
        }
    }

    /// Blocking toggle stub: records the preference and reports success.
    /// Requests are observed, never blocked, in this version.
    pub fn set_blocking_enabled(&mut self, enabled: bool) -> bool {
        self.settings_engine.set_blocking_enabled(enabled).is_ok()
    }
}
