//! SQLite storage implementation.
//!
//! Stores the workout blob as JSON text in a key-value table, one row per
//! key. Reads and writes are single statements, so each is atomic on its own.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;
use crate::model::WorkoutData;
use crate::storage::schema::apply_schema;
use crate::storage::{STORAGE_KEY, Store};

/// SQLite-based storage backend.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database at the given path.
    ///
    /// Creates the database and applies schema if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Open a database with an optional busy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open_with_timeout(path: &Path, timeout_ms: Option<u64>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;

        if let Some(timeout) = timeout_ms {
            conn.busy_timeout(Duration::from_millis(timeout))?;
        } else {
            // Default 5 second timeout
            conn.busy_timeout(Duration::from_secs(5))?;
        }

        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection (for read operations).
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Read a raw value by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Insert or replace a raw value by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            rusqlite::params![key, value, chrono::Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    /// Delete a key. Returns true if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn remove_raw(&self, key: &str) -> Result<bool> {
        let rows = self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(rows > 0)
    }
}

impl Store for SqliteStore {
    fn read(&self) -> Result<Option<WorkoutData>> {
        match self.get_raw(STORAGE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write(&mut self, data: &WorkoutData) -> Result<()> {
        let json = serde_json::to_string(data)?;
        self.set_raw(STORAGE_KEY, &json)
    }

    fn clear(&mut self) -> Result<()> {
        self.remove_raw(STORAGE_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exercise, WorkoutSession, WorkoutSet};
    use tempfile::TempDir;

    fn sample_data() -> WorkoutData {
        let mut data = WorkoutData::default();
        data.sessions.push(WorkoutSession::with_exercises(
            "2024-01-15",
            vec![Exercise::with_sets("Pushups", vec![WorkoutSet::bodyweight(40)])],
        ));
        data
    }

    #[test]
    fn test_empty_database_reads_none() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_overwrites_single_row() {
        let mut store = SqliteStore::open_memory().unwrap();
        let data = sample_data();
        store.write(&WorkoutData::default()).unwrap();
        store.write(&data).unwrap();

        let rows: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(store.read().unwrap(), Some(data));
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let store = SqliteStore::open_memory().unwrap();
        store.set_raw(STORAGE_KEY, "{broken").unwrap();
        assert!(store.read().is_err());
        assert!(store.load().sessions.is_empty());
    }

    #[test]
    fn test_persists_across_connections() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("data").join("liftlog.db");

        let data = sample_data();
        {
            let mut store = SqliteStore::open(&db_path).unwrap();
            store.save(&data);
        }

        let store = SqliteStore::open(&db_path).unwrap();
        assert_eq!(store.load(), data);
    }

    #[test]
    fn test_clear_leaves_other_keys() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.set_raw("theme", "dark").unwrap();
        store.write(&sample_data()).unwrap();

        store.clear().unwrap();

        assert!(store.read().unwrap().is_none());
        assert_eq!(store.get_raw("theme").unwrap().as_deref(), Some("dark"));
    }
}
