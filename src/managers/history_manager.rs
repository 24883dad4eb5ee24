//! Tracker History Manager for the dashboard.
//!
//! Records one `SiteVisit` per observed page state, keyed by page domain,
//! keeping only the most recent visits per domain. Visits scoring below the
//! heavy-site threshold also land in a per-day heavy-sites log. Backed by
//! SQLite via `rusqlite`.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::services::score_engine;
use crate::types::errors::HistoryError;
use crate::types::history::SiteVisit;
use crate::types::session::TabSession;

/// Trait defining tracker history operations.
pub trait HistoryManagerTrait {
    fn record_visit(
        &mut self,
        session: &TabSession,
        heavy_site_threshold: u8,
    ) -> Result<Option<SiteVisit>, HistoryError>;
    fn visits_for_domain(&self, domain: &str) -> Result<Vec<SiteVisit>, HistoryError>;
    fn all_visits(&self) -> Result<HashMap<String, Vec<SiteVisit>>, HistoryError>;
    fn latest_scores(&self) -> Result<Vec<u8>, HistoryError>;
    fn average_score(&self) -> Result<Option<u8>, HistoryError>;
    fn heavy_sites(&self, day: &str) -> Result<Vec<String>, HistoryError>;
    fn clear_all(&mut self) -> Result<(), HistoryError>;
}

/// History manager backed by a SQLite connection.
pub struct HistoryManager<'a> {
    conn: &'a Connection,
    visits_per_domain: usize,
}

impl<'a> HistoryManager<'a> {
    /// Creates a new `HistoryManager` keeping at most `visits_per_domain`
    /// recent visits for each page domain.
    pub fn new(conn: &'a Connection, visits_per_domain: usize) -> Self {
        Self {
            conn,
            visits_per_domain,
        }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Formats a UNIX timestamp as a "YYYY-MM-DD" day string (UTC).
    ///
    /// Civil-from-days arithmetic; the inverse of the usual days-from-civil
    /// conversion.
    fn day_from_timestamp(timestamp: i64) -> String {
        let days = timestamp.div_euclid(86400);
        let z = days + 719468;
        let era = z.div_euclid(146097);
        let doe = z.rem_euclid(146097);
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);
        format!("{:04}-{:02}-{:02}", year, month, day)
    }

    /// Reads the raw columns of a visit row; tracker JSON is parsed by the
    /// caller so serde errors map to `HistoryError`, not `rusqlite::Error`.
    #[allow(clippy::type_complexity)]
    fn row_to_raw(
        row: &rusqlite::Row,
    ) -> rusqlite::Result<(String, String, i64, bool, String, Option<String>, i64)> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
        ))
    }

    fn raw_to_visit(
        raw: (String, String, i64, bool, String, Option<String>, i64),
    ) -> Result<SiteVisit, HistoryError> {
        let (id, domain, privacy_score, blocked, trackers_json, page_url, timestamp) = raw;
        let trackers = serde_json::from_str(&trackers_json)
            .map_err(|e| HistoryError::SerializationError(e.to_string()))?;
        Ok(SiteVisit {
            id,
            domain,
            privacy_score: privacy_score.clamp(0, 100) as u8,
            blocked,
            trackers,
            page_url,
            timestamp,
        })
    }

    fn query_visits(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> Result<Vec<SiteVisit>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(args, Self::row_to_raw)
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let mut visits = Vec::new();
        for row in rows {
            let raw = row.map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
            visits.push(Self::raw_to_visit(raw)?);
        }
        Ok(visits)
    }
}

const VISIT_COLUMNS: &str = "id, domain, privacy_score, blocked, trackers, page_url, timestamp";

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records a visit for the session's page domain.
    ///
    /// Skips sessions without a page domain (no navigation seen yet) and
    /// returns `Ok(None)`. Otherwise scores the session's tracker set,
    /// inserts the visit, prunes the domain's log to the configured cap,
    /// and marks the domain as a heavy site for today when the score falls
    /// below the threshold.
    fn record_visit(
        &mut self,
        session: &TabSession,
        heavy_site_threshold: u8,
    ) -> Result<Option<SiteVisit>, HistoryError> {
        let Some(domain) = session.page_domain.as_deref() else {
            return Ok(None);
        };

        let privacy_score = score_engine::privacy_score(&session.trackers);
        let trackers_json = serde_json::to_string(&session.trackers)
            .map_err(|e| HistoryError::SerializationError(e.to_string()))?;

        let visit = SiteVisit {
            id: Uuid::new_v4().to_string(),
            domain: domain.to_string(),
            privacy_score,
            // Blocking is stubbed; visits always record as unblocked.
            blocked: false,
            trackers: session.trackers.clone(),
            page_url: session.page_url.clone(),
            timestamp: Self::now(),
        };

        self.conn
            .execute(
                "INSERT INTO tracker_history (id, domain, privacy_score, blocked, trackers, page_url, timestamp) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    visit.id,
                    visit.domain,
                    i64::from(visit.privacy_score),
                    visit.blocked,
                    trackers_json,
                    visit.page_url,
                    visit.timestamp
                ],
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        // Keep only the most recent visits for this domain.
        self.conn
            .execute(
                "DELETE FROM tracker_history WHERE domain = ?1 AND id NOT IN \
                 (SELECT id FROM tracker_history WHERE domain = ?1 \
                  ORDER BY timestamp DESC, rowid DESC LIMIT ?2)",
                params![visit.domain, self.visits_per_domain as i64],
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        if score_engine::is_heavy(privacy_score, heavy_site_threshold) {
            let day = Self::day_from_timestamp(visit.timestamp);
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO heavy_sites (day, domain) VALUES (?1, ?2)",
                    params![day, visit.domain],
                )
                .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        }

        Ok(Some(visit))
    }

    /// Visits for one page domain, newest first.
    fn visits_for_domain(&self, domain: &str) -> Result<Vec<SiteVisit>, HistoryError> {
        self.query_visits(
            &format!(
                "SELECT {} FROM tracker_history WHERE domain = ?1 \
                 ORDER BY timestamp DESC, rowid DESC",
                VISIT_COLUMNS
            ),
            &[&domain],
        )
    }

    /// All visits grouped by page domain, each group newest first.
    fn all_visits(&self) -> Result<HashMap<String, Vec<SiteVisit>>, HistoryError> {
        let visits = self.query_visits(
            &format!(
                "SELECT {} FROM tracker_history ORDER BY timestamp DESC, rowid DESC",
                VISIT_COLUMNS
            ),
            &[],
        )?;

        let mut grouped: HashMap<String, Vec<SiteVisit>> = HashMap::new();
        for visit in visits {
            grouped.entry(visit.domain.clone()).or_default().push(visit);
        }
        Ok(grouped)
    }

    /// The most recent visit's score for each domain.
    fn latest_scores(&self) -> Result<Vec<u8>, HistoryError> {
        Ok(self
            .all_visits()?
            .values()
            .filter_map(|visits| visits.first())
            .map(|visit| visit.privacy_score)
            .collect())
    }

    /// Rounded average of each domain's latest score, `None` with no
    /// history yet.
    fn average_score(&self) -> Result<Option<u8>, HistoryError> {
        let scores = self.latest_scores()?;
        if scores.is_empty() {
            return Ok(None);
        }
        let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let count = scores.len() as u32;
        // Round half up, as the dashboard displays it.
        Ok(Some(((total + count / 2) / count) as u8))
    }

    /// Domains marked tracking-heavy on the given "YYYY-MM-DD" day, in the
    /// order first recorded.
    fn heavy_sites(&self, day: &str) -> Result<Vec<String>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare("SELECT domain FROM heavy_sites WHERE day = ?1 ORDER BY rowid")
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(params![day], |row| row.get::<_, String>(0))
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let mut domains = Vec::new();
        for row in rows {
            domains.push(row.map_err(|e| HistoryError::DatabaseError(e.to_string()))?);
        }
        Ok(domains)
    }

    /// Clears all tracker history and heavy-site records.
    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.conn
            .execute("DELETE FROM tracker_history", [])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        self.conn
            .execute("DELETE FROM heavy_sites", [])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
