//! Persistence layer for liftlog.
//!
//! Storage is a single blob: the whole [`WorkoutData`] is read and written in
//! one round trip, so the consistency model is last-writer-wins. Backends only
//! implement the fallible primitives (`read`, `write`, `clear`); the [`Store`]
//! trait layers the soft-failing operations the rest of the crate uses on top:
//!
//! - `load` never fails: missing or corrupt data yields an empty dataset
//! - `save` never fails: write errors are logged and swallowed
//!
//! # Submodules
//!
//! - [`memory`] - In-memory store (tests, hosts with their own persistence)
//! - [`file`] - JSON file store with atomic writes
//! - [`sqlite`] - SQLite key-value store
//! - [`migrations`] - Schema-version upgrades for loaded blobs
//! - [`schema`] - SQLite schema definitions

pub mod file;
pub mod memory;
pub mod migrations;
pub mod schema;
pub mod sqlite;

pub use file::{JsonFileStore, atomic_write};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use tracing::{debug, error, warn};

use crate::error::Result;
use crate::model::{WorkoutData, WorkoutSession};

/// Key under which the blob is stored in key-value backends.
pub const STORAGE_KEY: &str = "workout-tracker-data";

/// A persistence backend for [`WorkoutData`].
///
/// Implementors provide the fallible primitives. Callers should use the
/// provided methods, which apply the fail-soft policy.
pub trait Store {
    /// Read the persisted blob, `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the blob is corrupt.
    fn read(&self) -> Result<Option<WorkoutData>>;

    /// Persist the full blob, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be written.
    fn write(&mut self, data: &WorkoutData) -> Result<()>;

    /// Remove the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn clear(&mut self) -> Result<()>;

    /// Load all data, degrading to an empty dataset on any failure.
    fn load(&self) -> WorkoutData {
        match self.read() {
            Ok(Some(data)) => migrations::migrate(data),
            Ok(None) => WorkoutData::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load workout data, starting from an empty log");
                WorkoutData::default()
            }
        }
    }

    /// Save all data. Failures are logged, not returned.
    fn save(&mut self, data: &WorkoutData) {
        match self.write(data) {
            Ok(()) => debug!(sessions = data.sessions.len(), "Saved workout data"),
            Err(e) => error!(error = %e, "Failed to save workout data"),
        }
    }

    /// Replace the session with the same id or append it, keeping the log
    /// sorted newest first.
    fn upsert_session(&mut self, session: WorkoutSession) {
        let mut data = self.load();
        data.upsert_session(session);
        self.save(&data);
    }

    /// Delete a session by id. Returns true if a session was removed.
    fn delete_session(&mut self, id: &str) -> bool {
        let mut data = self.load();
        let removed = data.remove_session(id);
        if removed {
            self.save(&data);
        }
        removed
    }

    /// Look a session up by id.
    fn get_session(&self, id: &str) -> Option<WorkoutSession> {
        self.load().session(id).cloned()
    }

    /// First session on the given date.
    fn get_session_by_date(&self, date: &str) -> Option<WorkoutSession> {
        self.load().session_by_date(date).cloned()
    }

    /// Wipe everything. Failures are logged, not returned.
    fn clear_all_data(&mut self) {
        if let Err(e) = self.clear() {
            error!(error = %e, "Failed to clear workout data");
        }
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn read(&self) -> Result<Option<WorkoutData>> {
        (**self).read()
    }

    fn write(&mut self, data: &WorkoutData) -> Result<()> {
        (**self).write(data)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
