// Privacy Guardian stateful components
// Managers own mutable state: per-tab sessions, durable snapshots, and
// tracker history.

pub mod history_manager;
pub mod session_store;
pub mod snapshot_store;
