//! Content hashing for import change detection.
//!
//! A merge that leaves a session byte-for-byte identical is reported as
//! unchanged rather than updated. Hashing the serialized JSON of the merged
//! fields detects this without comparing every set.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::model::WorkoutSession;

/// Compute a SHA256 hash of a serializable value.
///
/// # Panics
///
/// Panics if the value cannot be serialized to JSON. This should never happen
/// for our data types which are all serializable.
#[must_use]
pub fn content_hash<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_string(value).expect("serialization should not fail");
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hash of the fields an import can change: exercises and notes.
///
/// The id and date are excluded; they are fixed once a session exists.
#[must_use]
pub fn session_content_hash(session: &WorkoutSession) -> String {
    content_hash(&(&session.exercises, &session.notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exercise, WorkoutSet};

    #[test]
    fn test_content_hash_deterministic() {
        let hash1 = content_hash(&("Pushups", 40));
        let hash2 = content_hash(&("Pushups", 40));

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_session_hash_ignores_id() {
        let exercises = vec![Exercise::with_sets("Dips", vec![WorkoutSet::bodyweight(12)])];
        let a = WorkoutSession::with_exercises("2024-01-15", exercises.clone());
        let b = WorkoutSession::with_exercises("2024-01-15", exercises);
        assert_ne!(a.id, b.id);
        assert_eq!(session_content_hash(&a), session_content_hash(&b));
    }

    #[test]
    fn test_session_hash_tracks_sets_and_notes() {
        let mut session = WorkoutSession::with_exercises(
            "2024-01-15",
            vec![Exercise::with_sets("Dips", vec![WorkoutSet::bodyweight(12)])],
        );
        let original = session_content_hash(&session);

        session.exercises[0].sets[0].reps = 13;
        let changed_sets = session_content_hash(&session);
        assert_ne!(original, changed_sets);

        session.notes = Some("tired".to_string());
        assert_ne!(changed_sets, session_content_hash(&session));
    }
}
