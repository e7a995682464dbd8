//! SQLite schema for the key-value store.
//!
//! The database holds a single `kv` table. The workout blob lives under
//! [`STORAGE_KEY`](crate::storage::STORAGE_KEY); other keys are free for
//! host preferences.

use rusqlite::{Connection, Result};

/// The complete SQL schema.
///
/// Timestamps are stored as INTEGER (Unix milliseconds).
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
";

/// Apply pragmas and the schema to a connection.
///
/// Idempotent; safe to call on every open.
///
/// # Errors
///
/// Returns an error if a pragma or statement fails.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    // WAL is ignored for in-memory databases
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(SCHEMA_SQL)
}
