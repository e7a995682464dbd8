//! Workout model for liftlog.
//!
//! A session is the record of one calendar day. It holds exercises, each of
//! which holds an ordered list of sets. `WorkoutData` is the persisted blob.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::parse_date;

/// Schema version stamped on every persisted `WorkoutData`.
pub const CURRENT_VERSION: u32 = 1;

/// One completed unit of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Repetitions performed
    pub reps: u32,

    /// Load in kg. `None` (or zero) means bodyweight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl WorkoutSet {
    /// A bodyweight set.
    #[must_use]
    pub const fn bodyweight(reps: u32) -> Self {
        Self { reps, weight: None }
    }

    /// A set with a recorded load.
    #[must_use]
    pub const fn weighted(reps: u32, weight: f64) -> Self {
        Self {
            reps,
            weight: Some(weight),
        }
    }

    /// True when a finite, non-zero load was recorded.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some_and(|w| w != 0.0 && w.is_finite())
    }

    /// Load in kg, 0 for bodyweight sets.
    #[must_use]
    pub fn load(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Training volume of this set (`reps * weight`).
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.load()
    }
}

/// An exercise performed during a session.
///
/// The name is the match key for merges: case-sensitive, exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name
    pub name: String,

    /// Sets in the order they were performed
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl Exercise {
    /// Create an exercise with no sets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
        }
    }

    /// Create an exercise with the given sets.
    pub fn with_sets(name: impl Into<String>, sets: Vec<WorkoutSet>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }

    /// Append a set that repeats the last one, or an empty bodyweight set
    /// when the exercise has none yet.
    pub fn add_set(&mut self) -> &mut WorkoutSet {
        let next = self
            .sets
            .last()
            .cloned()
            .unwrap_or_else(|| WorkoutSet::bodyweight(0));
        self.sets.push(next);
        let last = self.sets.len() - 1;
        &mut self.sets[last]
    }

    /// Sum of reps across all sets.
    #[must_use]
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|s| u64::from(s.reps)).sum()
    }

    /// Sum of `reps * weight` across all sets.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(WorkoutSet::volume).sum()
    }

    /// Heaviest load across all sets, 0 when there are none.
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(WorkoutSet::load).fold(0.0, f64::max)
    }
}

/// The workout record for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Opaque unique identifier
    pub id: String,

    /// Calendar date, `YYYY-MM-DD`. The natural key for merges and lookups
    pub date: String,

    /// Exercises in display order
    #[serde(default)]
    pub exercises: Vec<Exercise>,

    /// Free-form notes for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Create an empty session with a freshly generated id.
    ///
    /// The date is taken as-is; use [`WorkoutSession::for_date`] for
    /// user-entered dates.
    pub fn new(date: impl Into<String>) -> Self {
        Self::with_exercises(date, Vec::new())
    }

    /// Create a session holding the given exercises.
    pub fn with_exercises(date: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        let date = date.into();
        Self {
            id: generate_session_id(&date),
            date,
            exercises,
            notes: None,
        }
    }

    /// Create an empty session after checking the date is a real calendar day.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if `date` is not `YYYY-MM-DD`.
    pub fn for_date(date: &str) -> Result<Self> {
        parse_date(date)?;
        Ok(Self::new(date))
    }

    /// Replace this session's exercises with a deep copy of another session's.
    pub fn copy_exercises_from(&mut self, previous: &Self) {
        self.exercises.clone_from(&previous.exercises);
    }

    /// Find an exercise by exact name (first match).
    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Notes, treating an empty string as absent.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Generate a unique session id of the form `session-<date>-<12 hex>`.
#[must_use]
pub fn generate_session_id(date: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("session-{date}-{}", &uuid[..12])
}

/// The persisted blob: every session plus a schema tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutData {
    /// All sessions, newest first after any mutation
    #[serde(default)]
    pub sessions: Vec<WorkoutSession>,

    /// Schema version (0 when the blob predates versioning)
    #[serde(default)]
    pub version: u32,
}

impl Default for WorkoutData {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
            version: CURRENT_VERSION,
        }
    }
}

impl WorkoutData {
    /// Sort sessions newest first. Sessions sharing a date keep their
    /// relative order.
    pub fn sort_sessions(&mut self) {
        self.sessions.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Replace the session with the same id, or append it, then re-sort.
    pub fn upsert_session(&mut self, session: WorkoutSession) {
        match self.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session,
            None => self.sessions.push(session),
        }
        self.sort_sessions();
    }

    /// Remove every session with the given id. Returns true if any was removed.
    pub fn remove_session(&mut self, id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        self.sessions.len() != before
    }

    /// Session with the given id.
    #[must_use]
    pub fn session(&self, id: &str) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// First session on the given date.
    #[must_use]
    pub fn session_by_date(&self, date: &str) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_on(date: &str) -> WorkoutSession {
        WorkoutSession::with_exercises(
            date,
            vec![Exercise::with_sets("Pushups", vec![WorkoutSet::bodyweight(20)])],
        )
    }

    #[test]
    fn test_set_volume_and_weighted() {
        let bodyweight = WorkoutSet::bodyweight(12);
        assert!(!bodyweight.is_weighted());
        assert!(bodyweight.volume().abs() < f64::EPSILON);

        let zero = WorkoutSet::weighted(8, 0.0);
        assert!(!zero.is_weighted());
        assert!(!WorkoutSet::weighted(8, f64::INFINITY).is_weighted());

        let loaded = WorkoutSet::weighted(10, 12.5);
        assert!(loaded.is_weighted());
        assert!((loaded.volume() - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exercise_totals() {
        let exercise = Exercise::with_sets(
            "Biceps",
            vec![WorkoutSet::weighted(10, 15.0), WorkoutSet::weighted(8, 17.5), WorkoutSet::bodyweight(5)],
        );
        assert_eq!(exercise.total_reps(), 23);
        assert!((exercise.total_volume() - 290.0).abs() < f64::EPSILON);
        assert!((exercise.max_weight() - 17.5).abs() < f64::EPSILON);

        assert!(Exercise::new("Empty").max_weight().abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_set_repeats_last() {
        let mut exercise = Exercise::new("Squat");
        assert_eq!(*exercise.add_set(), WorkoutSet::bodyweight(0));

        exercise.sets[0] = WorkoutSet::weighted(5, 100.0);
        exercise.add_set();
        assert_eq!(exercise.sets.len(), 2);
        assert_eq!(exercise.sets[1], WorkoutSet::weighted(5, 100.0));
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = WorkoutSession::new("2024-01-15");
        let b = WorkoutSession::new("2024-01-15");
        assert!(a.id.starts_with("session-2024-01-15-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_for_date_validates() {
        assert!(WorkoutSession::for_date("2024-02-29").is_ok());
        assert!(WorkoutSession::for_date("2023-02-29").is_err());
        assert!(WorkoutSession::for_date("yesterday").is_err());
    }

    #[test]
    fn test_copy_exercises_is_deep() {
        let previous = session_on("2024-01-14");
        let mut today = WorkoutSession::new("2024-01-15");
        today.copy_exercises_from(&previous);
        today.exercises[0].sets[0].reps = 25;

        assert_eq!(previous.exercises[0].sets[0].reps, 20);
        assert_eq!(today.exercises[0].sets[0].reps, 25);
    }

    #[test]
    fn test_upsert_replaces_by_id_and_sorts() {
        let mut data = WorkoutData::default();
        let first = session_on("2024-01-10");
        let second = session_on("2024-01-12");
        data.upsert_session(first.clone());
        data.upsert_session(second);

        assert_eq!(data.sessions[0].date, "2024-01-12");

        let mut edited = first;
        edited.notes = Some("felt strong".to_string());
        data.upsert_session(edited);

        assert_eq!(data.sessions.len(), 2);
        assert_eq!(data.sessions[1].notes(), Some("felt strong"));
    }

    #[test]
    fn test_remove_and_lookup() {
        let mut data = WorkoutData::default();
        let session = session_on("2024-01-10");
        let id = session.id.clone();
        data.upsert_session(session);

        assert!(data.session(&id).is_some());
        assert!(data.session_by_date("2024-01-10").is_some());
        assert!(data.remove_session(&id));
        assert!(!data.remove_session(&id));
        assert!(data.session_by_date("2024-01-10").is_none());
    }

    #[test]
    fn test_json_layout() {
        let mut session = WorkoutSession::with_exercises(
            "2024-01-15",
            vec![Exercise::with_sets(
                "Biceps",
                vec![WorkoutSet::weighted(10, 15.0), WorkoutSet::bodyweight(12)],
            )],
        );
        session.id = "s1".to_string();
        let data = WorkoutData {
            sessions: vec![session],
            version: CURRENT_VERSION,
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["sessions"][0]["exercises"][0]["sets"][0]["weight"], 15.0);
        assert!(json["sessions"][0]["exercises"][0]["sets"][1].get("weight").is_none());
        assert!(json["sessions"][0].get("notes").is_none());
    }

    #[test]
    fn test_missing_version_deserializes_as_zero() {
        let data: WorkoutData = serde_json::from_str(r#"{"sessions":[]}"#).unwrap();
        assert_eq!(data.version, 0);
    }
}
