//! Read-only analytics over a session list.
//!
//! Every function here is pure: it takes sessions by reference, allocates
//! only its result and never touches the store.
//!
//! - [`streak`] - current and longest consecutive-day streaks
//! - [`progress`] - per-exercise series for charts
//! - [`session`] - single-session totals, previous-session lookup and comparison
//! - [`heatmap`] - twelve-week activity grid

pub mod heatmap;
pub mod progress;
pub mod session;
pub mod streak;

pub use heatmap::{HeatmapDay, HeatmapWeek, activity_heatmap};
pub use progress::{ExerciseProgress, get_all_exercises, get_exercise_progress};
pub use session::{
    ExerciseComparison, SessionStats, compare_exercise, compare_sessions, get_previous_session,
    get_session_stats, session_intensity,
};
pub use streak::{WorkoutStreak, calculate_streak, calculate_streak_on};
