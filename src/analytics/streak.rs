//! Workout streaks.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::model::WorkoutSession;
use crate::validate::parse_date;

/// Streak summary over a session list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkoutStreak {
    /// Consecutive days ending today or yesterday, 0 otherwise
    pub current_streak: u32,
    /// Longest run of consecutive days anywhere in the log
    pub longest_streak: u32,
    /// Number of sessions (sessions sharing a date each count)
    pub total_workouts: usize,
    /// Distinct session dates
    pub workout_days: BTreeSet<String>,
}

/// Streak as of the local calendar date.
#[must_use]
pub fn calculate_streak(sessions: &[WorkoutSession]) -> WorkoutStreak {
    calculate_streak_on(sessions, Local::now().date_naive())
}

/// Streak as of `today`.
///
/// A date that is not a real calendar day never links to its neighbours.
#[must_use]
pub fn calculate_streak_on(sessions: &[WorkoutSession], today: NaiveDate) -> WorkoutStreak {
    if sessions.is_empty() {
        return WorkoutStreak::default();
    }

    let workout_days: BTreeSet<String> = sessions.iter().map(|s| s.date.clone()).collect();
    // Newest first
    let dates: Vec<Option<NaiveDate>> = workout_days
        .iter()
        .rev()
        .map(|d| parse_date(d).ok())
        .collect();

    let mut current_streak = 0;
    if let Some(most_recent) = dates[0] {
        if (today - most_recent).num_days() <= 1 {
            current_streak = 1;
            for pair in dates.windows(2) {
                if !consecutive(pair[0], pair[1]) {
                    break;
                }
                current_streak += 1;
            }
        }
    }

    let mut longest_streak = 0;
    let mut run = 1;
    for pair in dates.windows(2) {
        if consecutive(pair[0], pair[1]) {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 1;
        }
    }
    longest_streak = longest_streak.max(run).max(current_streak);

    WorkoutStreak {
        current_streak,
        longest_streak,
        total_workouts: sessions.len(),
        workout_days,
    }
}

fn consecutive(newer: Option<NaiveDate>, older: Option<NaiveDate>) -> bool {
    matches!((newer, older), (Some(a), Some(b)) if (a - b).num_days() == 1)
}
