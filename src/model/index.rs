//! Date index over a session list.
//!
//! Imports look sessions up by date once per committed block. The index maps
//! each date to the position of the first session carrying it, so lookups do
//! not rescan the whole list.

use std::collections::BTreeMap;

use crate::model::WorkoutSession;

/// Ordered map from date to the index of the first session on that date.
#[derive(Debug, Default, Clone)]
pub struct SessionIndex {
    by_date: BTreeMap<String, usize>,
}

impl SessionIndex {
    /// Build the index for a session list.
    #[must_use]
    pub fn build(sessions: &[WorkoutSession]) -> Self {
        let mut index = Self::default();
        for (position, session) in sessions.iter().enumerate() {
            index.insert(&session.date, position);
        }
        index
    }

    /// Position of the first session on `date`.
    #[must_use]
    pub fn get(&self, date: &str) -> Option<usize> {
        self.by_date.get(date).copied()
    }

    /// Record a session at `position`. An earlier entry for the same date wins.
    pub fn insert(&mut self, date: &str, position: usize) {
        self.by_date.entry(date.to_string()).or_insert(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let sessions = vec![
            WorkoutSession::new("2024-01-12"),
            WorkoutSession::new("2024-01-10"),
            WorkoutSession::new("2024-01-12"),
        ];
        let index = SessionIndex::build(&sessions);

        assert_eq!(index.get("2024-01-12"), Some(0));
        assert_eq!(index.get("2024-01-10"), Some(1));
        assert_eq!(index.get("2024-01-11"), None);
    }

    #[test]
    fn test_insert_after_build() {
        let mut index = SessionIndex::build(&[]);
        assert_eq!(index.get("2024-03-01"), None);
        index.insert("2024-03-01", 4);
        index.insert("2024-03-01", 9);
        assert_eq!(index.get("2024-03-01"), Some(4));
    }
}
