use privacy_guardian::types::errors::*;

// === SnapshotError Tests ===

#[test]
fn snapshot_error_database_display() {
    let err = SnapshotError::DatabaseError("disk I/O error".to_string());
    assert_eq!(err.to_string(), "Snapshot database error: disk I/O error");
}

#[test]
fn snapshot_error_serialization_display() {
    let err = SnapshotError::SerializationError("unexpected EOF".to_string());
    assert_eq!(
        err.to_string(),
        "Snapshot serialization error: unexpected EOF"
    );
}

#[test]
fn snapshot_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SnapshotError::DatabaseError("locked".to_string()));
    assert!(err.source().is_none());
}

// === HistoryError Tests ===

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::DatabaseError("no such table".to_string()).to_string(),
        "History database error: no such table"
    );
    assert_eq!(
        HistoryError::SerializationError("invalid type".to_string()).to_string(),
        "History serialization error: invalid type"
    );
}

#[test]
fn history_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(HistoryError::DatabaseError("busy".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("trailing comma".to_string()).to_string(),
        "Settings serialization error: trailing comma"
    );
    assert_eq!(
        SettingsError::InvalidValue("threshold 150".to_string()).to_string(),
        "Invalid settings value: threshold 150"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SettingsError::InvalidValue("bad".to_string()));
    assert!(err.source().is_none());
}
