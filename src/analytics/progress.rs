//! Per-exercise progress series.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::WorkoutSession;

/// Time series for one exercise. All vectors are index-aligned with `dates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExerciseProgress {
    pub exercise_name: String,
    /// Session dates, oldest first
    pub dates: Vec<String>,
    pub total_reps: Vec<u64>,
    pub total_volume: Vec<f64>,
    pub max_weight: Vec<f64>,
}

/// Progress of the exercise named exactly `exercise_name`.
///
/// Sessions sharing a date keep their relative order.
#[must_use]
pub fn get_exercise_progress(sessions: &[WorkoutSession], exercise_name: &str) -> ExerciseProgress {
    let mut relevant: Vec<_> = sessions
        .iter()
        .filter_map(|s| s.exercise(exercise_name).map(|e| (s.date.as_str(), e)))
        .collect();
    relevant.sort_by(|a, b| a.0.cmp(b.0));

    let mut progress = ExerciseProgress {
        exercise_name: exercise_name.to_string(),
        ..ExerciseProgress::default()
    };
    for (date, exercise) in relevant {
        progress.dates.push(date.to_string());
        progress.total_reps.push(exercise.total_reps());
        progress.total_volume.push(exercise.total_volume());
        progress.max_weight.push(exercise.max_weight());
    }
    progress
}

/// Distinct exercise names across all sessions, sorted.
#[must_use]
pub fn get_all_exercises(sessions: &[WorkoutSession]) -> Vec<String> {
    sessions
        .iter()
        .flat_map(|s| s.exercises.iter().map(|e| e.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exercise, WorkoutSet};

    fn log() -> Vec<WorkoutSession> {
        vec![
            WorkoutSession::with_exercises(
                "2024-01-17",
                vec![
                    Exercise::with_sets(
                        "Bench",
                        vec![WorkoutSet::weighted(5, 80.0), WorkoutSet::weighted(5, 82.5)],
                    ),
                    Exercise::with_sets("Pushups", vec![WorkoutSet::bodyweight(30)]),
                ],
            ),
            WorkoutSession::with_exercises(
                "2024-01-15",
                vec![Exercise::with_sets("Bench", vec![WorkoutSet::weighted(5, 80.0)])],
            ),
            WorkoutSession::with_exercises(
                "2024-01-16",
                vec![Exercise::with_sets("Squat", vec![WorkoutSet::weighted(5, 100.0)])],
            ),
        ]
    }

    #[test]
    fn test_progress_oldest_first() {
        let progress = get_exercise_progress(&log(), "Bench");

        assert_eq!(progress.exercise_name, "Bench");
        assert_eq!(progress.dates, vec!["2024-01-15", "2024-01-17"]);
        assert_eq!(progress.total_reps, vec![5, 10]);
        assert_eq!(progress.total_volume, vec![400.0, 812.5]);
        assert_eq!(progress.max_weight, vec![80.0, 82.5]);
    }

    #[test]
    fn test_progress_name_is_exact() {
        let progress = get_exercise_progress(&log(), "bench");
        assert!(progress.dates.is_empty());
        assert!(progress.max_weight.is_empty());
    }

    #[test]
    fn test_bodyweight_and_empty_exercises() {
        let sessions = vec![
            WorkoutSession::with_exercises("2024-01-01", vec![Exercise::new("Plank")]),
            WorkoutSession::with_exercises(
                "2024-01-02",
                vec![Exercise::with_sets("Plank", vec![WorkoutSet::bodyweight(60)])],
            ),
        ];
        let progress = get_exercise_progress(&sessions, "Plank");

        assert_eq!(progress.total_reps, vec![0, 60]);
        assert_eq!(progress.total_volume, vec![0.0, 0.0]);
        assert_eq!(progress.max_weight, vec![0.0, 0.0]);
    }

    #[test]
    fn test_all_exercises_sorted_distinct() {
        assert_eq!(get_all_exercises(&log()), vec!["Bench", "Pushups", "Squat"]);
        assert!(get_all_exercises(&[]).is_empty());
    }
}
