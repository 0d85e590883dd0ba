//! SQLite database initialization for the server store.
//!
//! Connections are deliberately short-lived: the store opens one per logical
//! operation and drops it when done, so a crashed or suspended invocation in
//! another shell tab never leaves a stale lock behind. The busy timeout gives
//! a second invocation a brief window to wait out a live one instead.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::store::StoreError;

/// How long a second process waits on a locked database before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_millis(1000);

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS servers (
        alias  TEXT PRIMARY KEY,
        record TEXT NOT NULL
    );
";

/// Open (or create) the bookmark database at the given path, with the schema
/// initialized and an exclusive file lock held for the connection's lifetime.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection, StoreError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    // One process at a time; released when the connection drops.
    conn.pragma_update(None, "locking_mode", "EXCLUSIVE")?;
    conn.execute_batch(SCHEMA)?;

    tracing::debug!(path = %path.display(), "database opened");
    Ok(conn)
}
