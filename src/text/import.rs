//! Text import with date-keyed merge.
//!
//! Parsed blocks are merged into the working copy of the log by date:
//!
//! - A block whose date matches an existing session merges into the first
//!   session on that date. Exercises are matched by name: same-named ones are
//!   replaced whole, untouched ones keep their place, new ones are appended.
//!   Notes are replaced only when the block carries non-empty notes.
//! - Any other block becomes a new session with a fresh id.
//!
//! The whole text is parsed before anything is merged, and the working copy is
//! only persisted after every block merged, so a rejected import writes nothing.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::model::{Exercise, SessionIndex, WorkoutData, WorkoutSession};
use crate::storage::Store;
use crate::text::hash::session_content_hash;
use crate::text::parser::parse;
use crate::text::types::{CodecResult, ImportOutcome, ImportStats, ParsedSession};

/// Importer for workout log text.
///
/// Loads the log from the store, merges the text into it and saves it back.
pub struct Importer<'a, S: Store + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: Store + ?Sized> Importer<'a, S> {
    /// Create an importer writing to `store`.
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Import text into the store.
    ///
    /// Never fails: a text that cannot be parsed yields an unsuccessful
    /// outcome and leaves the store untouched.
    pub fn import_text(&mut self, text: &str) -> ImportOutcome {
        let mut data = self.store.load();

        match import_into(text, &mut data) {
            Ok(stats) => {
                self.store.save(&data);
                info!(
                    created = stats.created,
                    updated = stats.updated,
                    unchanged = stats.unchanged,
                    "Imported workout log"
                );
                ImportOutcome::success(stats)
            }
            Err(e) => {
                warn!(error = %e, "Rejected workout log import");
                ImportOutcome::failure()
            }
        }
    }

    /// Import a text file into the store.
    ///
    /// A file that cannot be read yields the failure outcome, like a text
    /// that cannot be parsed.
    pub fn import_file(&mut self, path: &Path) -> ImportOutcome {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "Read import file");
                self.import_text(&text)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read import file");
                ImportOutcome::failure()
            }
        }
    }
}

/// Merge `text` into `data` in place, leaving sessions sorted newest first.
///
/// On error `data` is unchanged.
///
/// # Errors
///
/// Returns `InvalidSet` when a set line cannot be represented.
pub fn import_into(text: &str, data: &mut WorkoutData) -> CodecResult<ImportStats> {
    let blocks = parse(text)?;
    let mut index = SessionIndex::build(&data.sessions);
    let mut stats = ImportStats::default();

    for block in blocks {
        if let Some(position) = index.get(&block.date) {
            let session = &mut data.sessions[position];
            let before = session_content_hash(session);
            merge_block(session, block);

            if session_content_hash(session) == before {
                debug!(date = %session.date, "Block left session unchanged");
                stats.unchanged += 1;
            } else {
                debug!(date = %session.date, "Merged block into existing session");
                stats.updated += 1;
            }
        } else {
            let session = new_session(block);
            debug!(date = %session.date, id = %session.id, "Created session from block");
            index.insert(&session.date, data.sessions.len());
            data.sessions.push(session);
            stats.created += 1;
        }
    }

    data.sort_sessions();
    Ok(stats)
}

fn new_session(block: ParsedSession) -> WorkoutSession {
    let mut session =
        WorkoutSession::with_exercises(block.date, merge_exercises(Vec::new(), block.exercises));
    session.notes = block.notes;
    session
}

fn merge_block(session: &mut WorkoutSession, block: ParsedSession) {
    let existing = std::mem::take(&mut session.exercises);
    session.exercises = merge_exercises(existing, block.exercises);
    if block.notes.is_some() {
        session.notes = block.notes;
    }
}

/// Merge by name. A later exercise replaces an earlier one with the same
/// name but keeps the earlier one's position.
fn merge_exercises(existing: Vec<Exercise>, incoming: Vec<Exercise>) -> Vec<Exercise> {
    let mut by_name: IndexMap<String, Exercise> = IndexMap::new();
    for exercise in existing.into_iter().chain(incoming) {
        by_name.insert(exercise.name.clone(), exercise);
    }
    by_name.into_values().collect()
}
