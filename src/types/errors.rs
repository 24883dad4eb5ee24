use std::fmt;

// === SnapshotError ===

/// Errors related to durable tab-session snapshots.
#[derive(Debug)]
pub enum SnapshotError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize a session snapshot.
    SerializationError(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::DatabaseError(msg) => {
                write!(f, "Snapshot database error: {}", msg)
            }
            SnapshotError::SerializationError(msg) => {
                write!(f, "Snapshot serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

// === HistoryError ===

/// Errors related to tracker history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize a visit's tracker set.
    SerializationError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::DatabaseError(msg) => {
                write!(f, "History database error: {}", msg)
            }
            HistoryError::SerializationError(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
