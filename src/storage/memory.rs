//! In-memory store.
//!
//! Keeps the serialized blob as a string, exactly as a key-value backend
//! would, so corrupt-data behavior can be exercised without touching disk.

use crate::error::Result;
use crate::model::WorkoutData;
use crate::storage::Store;

/// Store backed by a JSON string held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an arbitrary raw blob.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// Create a store pre-populated with data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be serialized.
    pub fn with_data(data: &WorkoutData) -> Result<Self> {
        Ok(Self {
            raw: Some(serde_json::to_string(data)?),
        })
    }

    /// The raw blob as last written.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl Store for MemoryStore {
    fn read(&self) -> Result<Option<WorkoutData>> {
        self.raw
            .as_deref()
            .map(serde_json::from_str::<WorkoutData>)
            .transpose()
            .map_err(Into::into)
    }

    fn write(&mut self, data: &WorkoutData) -> Result<()> {
        self.raw = Some(serde_json::to_string(data)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.raw = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkoutSession;

    #[test]
    fn test_read_round_trip() {
        let mut data = WorkoutData::default();
        data.sessions.push(WorkoutSession::new("2024-05-01"));

        let mut store = MemoryStore::new();
        assert!(store.read().unwrap().is_none());

        store.write(&data).unwrap();
        assert_eq!(store.read().unwrap(), Some(data));
        assert!(store.raw().unwrap().contains("2024-05-01"));
    }

    #[test]
    fn test_read_corrupt_errors() {
        let store = MemoryStore::with_raw("[]");
        assert!(store.read().is_err());
    }
}
