//! Durable per-tab session snapshots.
//!
//! Persists the full `TabSession` as JSON keyed by tab id, backed by SQLite
//! via `rusqlite`. Writes use INSERT OR REPLACE: several requests arriving
//! in quick succession coalesce to last-write-wins, and a navigation reset
//! simply overwrites whatever the prior page load stored.

use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};

use crate::types::errors::SnapshotError;
use crate::types::session::TabSession;

/// Trait defining the snapshot persistence interface.
pub trait SnapshotStoreTrait {
    fn save(&mut self, session: &TabSession) -> Result<(), SnapshotError>;
    fn load(&self, tab_id: i64) -> Result<Option<TabSession>, SnapshotError>;
    fn delete(&mut self, tab_id: i64) -> Result<(), SnapshotError>;
}

/// Snapshot store backed by a SQLite connection.
pub struct SnapshotStore<'a> {
    conn: &'a Connection,
}

impl<'a> SnapshotStore<'a> {
    /// Creates a new `SnapshotStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl<'a> SnapshotStoreTrait for SnapshotStore<'a> {
    /// Upserts the session snapshot for its tab id (last-write-wins).
    fn save(&mut self, session: &TabSession) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(session)
            .map_err(|e| SnapshotError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO tab_snapshots (tab_id, data, updated_at) VALUES (?1, ?2, ?3)",
                params![session.tab_id, json, Self::now()],
            )
            .map_err(|e| SnapshotError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Loads the snapshot for a tab id, or `None` if nothing is stored.
    fn load(&self, tab_id: i64) -> Result<Option<TabSession>, SnapshotError> {
        let result = self.conn.query_row(
            "SELECT data FROM tab_snapshots WHERE tab_id = ?1",
            params![tab_id],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(json) => {
                let session: TabSession = serde_json::from_str(&json)
                    .map_err(|e| SnapshotError::SerializationError(e.to_string()))?;
                Ok(Some(session))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SnapshotError::DatabaseError(e.to_string())),
        }
    }

    /// Deletes the snapshot for a closed tab. Deleting a missing snapshot
    /// is not an error.
    fn delete(&mut self, tab_id: i64) -> Result<(), SnapshotError> {
        self.conn
            .execute(
                "DELETE FROM tab_snapshots WHERE tab_id = ?1",
                params![tab_id],
            )
            .map_err(|e| SnapshotError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
