//! Single-session summaries and session-to-session comparison.

use serde::Serialize;

use crate::model::{Exercise, WorkoutSession};

/// Aggregate totals for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_exercises: usize,
    pub total_sets: usize,
    pub total_reps: u64,
    pub total_volume: f64,
}

/// Totals for one session.
#[must_use]
pub fn get_session_stats(session: &WorkoutSession) -> SessionStats {
    session
        .exercises
        .iter()
        .fold(SessionStats::default(), |mut stats, exercise| {
            stats.total_exercises += 1;
            stats.total_sets += exercise.sets.len();
            stats.total_reps += exercise.total_reps();
            stats.total_volume += exercise.total_volume();
            stats
        })
}

/// Activity level of a session from its set count, 1 through 4.
///
/// 0 is left for days with no session.
#[must_use]
pub fn session_intensity(stats: &SessionStats) -> u8 {
    match stats.total_sets {
        20.. => 4,
        15..=19 => 3,
        10..=14 => 2,
        _ => 1,
    }
}

/// The latest session strictly before `reference_date`.
///
/// When several sessions share that date, the first in `sessions` wins.
#[must_use]
pub fn get_previous_session<'a>(
    sessions: &'a [WorkoutSession],
    reference_date: &str,
) -> Option<&'a WorkoutSession> {
    sessions
        .iter()
        .filter(|s| s.date.as_str() < reference_date)
        .fold(None, |best: Option<&WorkoutSession>, s| match best {
            Some(b) if b.date >= s.date => Some(b),
            _ => Some(s),
        })
}

/// One exercise measured against the previous session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseComparison {
    pub exercise_name: String,
    pub previous_total_reps: u64,
    pub previous_total_volume: f64,
    pub previous_max_weight: f64,
    /// Whether the current session has logged this exercise
    pub current_logged: bool,
    /// Current totals are 0 when `current_logged` is false
    pub current_total_reps: u64,
    pub current_total_volume: f64,
    pub current_max_weight: f64,
    pub reps_diff: i64,
    pub volume_diff: f64,
    pub weight_diff: f64,
}

/// Compare `exercise_name` between two sessions.
///
/// `None` when the previous session has no exercise by that name.
#[must_use]
pub fn compare_exercise(
    current: Option<&WorkoutSession>,
    previous: &WorkoutSession,
    exercise_name: &str,
) -> Option<ExerciseComparison> {
    let prev = previous.exercise(exercise_name)?;
    let curr = current.and_then(|s| s.exercise(exercise_name));

    let (current_total_reps, current_total_volume, current_max_weight) =
        curr.map_or((0, 0.0, 0.0), |e: &Exercise| {
            (e.total_reps(), e.total_volume(), e.max_weight())
        });
    let previous_total_reps = prev.total_reps();
    let previous_total_volume = prev.total_volume();
    let previous_max_weight = prev.max_weight();

    Some(ExerciseComparison {
        exercise_name: exercise_name.to_string(),
        previous_total_reps,
        previous_total_volume,
        previous_max_weight,
        current_logged: curr.is_some(),
        current_total_reps,
        current_total_volume,
        current_max_weight,
        reps_diff: signed(current_total_reps) - signed(previous_total_reps),
        volume_diff: current_total_volume - previous_total_volume,
        weight_diff: current_max_weight - previous_max_weight,
    })
}

/// Comparisons for every exercise of `previous`, in its order.
#[must_use]
pub fn compare_sessions(
    current: Option<&WorkoutSession>,
    previous: &WorkoutSession,
) -> Vec<ExerciseComparison> {
    previous
        .exercises
        .iter()
        .filter_map(|e| compare_exercise(current, previous, &e.name))
        .collect()
}

fn signed(reps: u64) -> i64 {
    i64::try_from(reps).unwrap_or(i64::MAX)
}
