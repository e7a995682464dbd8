//! Text export.
//!
//! Renders sessions into the line-oriented workout log format:
//!
//! ```text
//! Workout Log
//!
//! Date: 2024-01-15
//! Notes: felt strong
//!
//! Pushups
//! 40
//!
//! Biceps
//! 10 x 15kg
//!
//! ---
//!
//! ```
//!
//! Output depends only on the order of the sessions passed in. The text
//! parses back into the same sessions (ids aside).

use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::model::{WorkoutSession, WorkoutSet};
use crate::storage::{Store, atomic_write};
use crate::text::parser::{DATE_PREFIX, NOTES_PREFIX, SEPARATOR};
use crate::text::types::{CodecResult, ExportStats};
use crate::validate::format_date;

/// First line of every export.
pub const HEADER: &str = "Workout Log";

/// Exporter for workout log text.
pub struct Exporter<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> Exporter<'a, S> {
    /// Create an exporter reading from `store`.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Render the whole log as text.
    #[must_use]
    pub fn export_text(&self) -> String {
        export_as_text(&self.store.load().sessions)
    }

    /// Write the whole log to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. An existing file at
    /// `path` is left intact in that case.
    pub fn export_to_file(&self, path: &Path) -> CodecResult<ExportStats> {
        let data = self.store.load();
        let text = export_as_text(&data.sessions);
        atomic_write(path, &text)?;

        let stats = export_stats(&data.sessions);
        info!(
            path = %path.display(),
            sessions = stats.sessions,
            sets = stats.sets,
            "Exported workout log"
        );
        Ok(stats)
    }
}

/// Render sessions, in the order given, as workout log text.
#[must_use]
pub fn export_as_text(sessions: &[WorkoutSession]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n");

    for session in sessions {
        out.push_str(&format!("{DATE_PREFIX} {}\n", session.date));
        if let Some(notes) = session.notes() {
            out.push_str(&format!("{NOTES_PREFIX} {notes}\n"));
        }
        out.push('\n');

        for exercise in &session.exercises {
            out.push_str(&exercise.name);
            out.push('\n');
            for set in &exercise.sets {
                out.push_str(&format_set(set));
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }

    out
}

/// One set line: `12` or `10 x 12.5kg`.
#[must_use]
pub fn format_set(set: &WorkoutSet) -> String {
    match set.weight {
        Some(weight) if set.is_weighted() => format!("{} x {weight}kg", set.reps),
        _ => set.reps.to_string(),
    }
}

/// Counts of what an export writes.
#[must_use]
pub fn export_stats(sessions: &[WorkoutSession]) -> ExportStats {
    sessions.iter().fold(ExportStats::default(), |mut stats, session| {
        stats.sessions += 1;
        stats.exercises += session.exercises.len();
        stats.sets += session.exercises.iter().map(|e| e.sets.len()).sum::<usize>();
        stats
    })
}

/// Suggested file name for an export made on `date`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("workout-log-{}.txt", format_date(date))
}

/// Suggested file name for an export made today (local time).
#[must_use]
pub fn export_filename_today() -> String {
    export_filename(Local::now().date_naive())
}
