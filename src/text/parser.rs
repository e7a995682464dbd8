//! Line-oriented parser for the workout log text format.
//!
//! The parser is a small state machine driven one trimmed line at a time:
//!
//! | State        | Meaning                                   |
//! |--------------|-------------------------------------------|
//! | `Idle`       | no `Date:` seen since the last `---`      |
//! | `InSession`  | a date is open, no exercise is open       |
//! | `InExercise` | a date is open and an exercise is open    |
//!
//! Each line is classified first, in priority order: blank, `---`, `Date:`,
//! `Notes:`, set line, exercise name. Each kind has its own transition.
//! A block commits when `---`, the next `Date:`, or end of input closes it,
//! and only if it holds at least one exercise.
//!
//! Nothing outside a `Date:` block can ever commit, so `Idle` discards
//! everything except the next `Date:` line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::model::{Exercise, WorkoutSet};
use crate::text::types::{CodecError, CodecResult, ParsedSession};
use crate::validate::parse_float_prefix;

/// A set line: reps, optionally followed by `x <weight>kg`.
static SET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(?:\s*x\s*([0-9.]+)kg)?$").expect("set-line pattern is valid")
});

/// Byte order mark some editors put at the start of a file.
const BOM: char = '\u{feff}';

/// Session terminator line.
pub const SEPARATOR: &str = "---";
/// Prefix of the line that opens a session block.
pub const DATE_PREFIX: &str = "Date:";
/// Prefix of the notes line.
pub const NOTES_PREFIX: &str = "Notes:";

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// Empty after trimming.
    Blank,
    /// Exactly `---`.
    Separator,
    /// `Date:` followed by the (trimmed) date text.
    Date(&'a str),
    /// `Notes:` followed by the (trimmed) notes text.
    Notes(&'a str),
    /// A set line.
    Set(WorkoutSet),
    /// Anything else: an exercise name.
    Name(&'a str),
}

/// Classify a line. `line_no` is only used for error reporting.
///
/// # Errors
///
/// Returns `InvalidSet` when a set line's rep count does not fit in a `u32`.
pub fn classify(line: &str, line_no: usize) -> CodecResult<LineKind<'_>> {
    let line = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);

    if line.is_empty() {
        return Ok(LineKind::Blank);
    }
    if line == SEPARATOR {
        return Ok(LineKind::Separator);
    }
    if let Some(rest) = line.strip_prefix(DATE_PREFIX) {
        return Ok(LineKind::Date(rest.trim()));
    }
    if let Some(rest) = line.strip_prefix(NOTES_PREFIX) {
        return Ok(LineKind::Notes(rest.trim()));
    }
    if let Some(caps) = SET_LINE.captures(line) {
        let reps_text = &caps[1];
        let reps = reps_text.parse::<u32>().map_err(|_| CodecError::InvalidSet {
            line: line_no,
            message: format!("rep count {reps_text} is out of range"),
        })?;
        let weight = caps
            .get(2)
            .and_then(|m| parse_float_prefix(m.as_str()))
            .filter(|w| w.is_finite());
        return Ok(LineKind::Set(WorkoutSet { reps, weight }));
    }

    Ok(LineKind::Name(line))
}

/// Observable parser state, for callers that drive the parser line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Idle,
    InSession,
    InExercise,
}

/// A `Date:` block under construction.
#[derive(Debug)]
struct Block {
    date: String,
    exercises: Vec<Exercise>,
    notes: Option<String>,
    line: usize,
}

impl Block {
    fn new(date: &str, line: usize) -> Self {
        Self {
            date: date.to_string(),
            exercises: Vec::new(),
            notes: None,
            line,
        }
    }

    fn into_parsed(self) -> Option<ParsedSession> {
        if self.date.is_empty() {
            debug!(line = self.line, "Discarding block with an empty date");
            return None;
        }
        if self.exercises.is_empty() {
            debug!(date = %self.date, line = self.line, "Discarding block with no exercises");
            return None;
        }
        Some(ParsedSession {
            date: self.date,
            exercises: self.exercises,
            notes: self.notes.filter(|n| !n.is_empty()),
            line: self.line,
        })
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InSession(Block),
    InExercise(Block, Exercise),
}

/// Incremental parser. Feed lines in order, then call [`Parser::finish`].
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
    committed: Vec<ParsedSession>,
    line_no: usize,
}

impl Parser {
    /// Create a parser in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StateKind {
        match self.state {
            State::Idle => StateKind::Idle,
            State::InSession(_) => StateKind::InSession,
            State::InExercise(..) => StateKind::InExercise,
        }
    }

    /// Blocks committed so far.
    #[must_use]
    pub fn committed(&self) -> &[ParsedSession] {
        &self.committed
    }

    /// Consume one line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSet` for a set line whose rep count overflows.
    pub fn feed(&mut self, line: &str) -> CodecResult<()> {
        self.line_no += 1;
        let kind = classify(line, self.line_no)?;
        trace!(line = self.line_no, ?kind, "Classified line");

        let state = std::mem::take(&mut self.state);
        self.state = match kind {
            LineKind::Blank => Self::on_blank(state),
            LineKind::Separator => self.on_separator(state),
            LineKind::Date(date) => self.on_date(state, date),
            LineKind::Notes(notes) => Self::on_notes(state, notes),
            LineKind::Set(set) => self.on_set(state, set),
            LineKind::Name(name) => Self::on_name(state, name),
        };
        Ok(())
    }

    /// Close any open exercise and block, returning every committed block.
    #[must_use]
    pub fn finish(mut self) -> Vec<ParsedSession> {
        let state = std::mem::take(&mut self.state);
        self.commit(state);
        self.committed
    }

    /// A blank line ends the open exercise but not the block.
    fn on_blank(state: State) -> State {
        match state {
            State::InExercise(mut block, exercise) => {
                block.exercises.push(exercise);
                State::InSession(block)
            }
            other => other,
        }
    }

    /// `---` commits the block.
    fn on_separator(&mut self, state: State) -> State {
        self.commit(state);
        State::Idle
    }

    /// `Date:` commits the previous block and opens a new one.
    fn on_date(&mut self, state: State, date: &str) -> State {
        self.commit(state);
        State::InSession(Block::new(date, self.line_no))
    }

    /// `Notes:` applies to the open block; it does not close the exercise.
    fn on_notes(state: State, notes: &str) -> State {
        match state {
            State::Idle => State::Idle,
            State::InSession(mut block) => {
                block.notes = Some(notes.to_string());
                State::InSession(block)
            }
            State::InExercise(mut block, exercise) => {
                block.notes = Some(notes.to_string());
                State::InExercise(block, exercise)
            }
        }
    }

    /// A set line joins the open exercise, or is dropped when there is none.
    fn on_set(&self, state: State, set: WorkoutSet) -> State {
        match state {
            State::InExercise(block, mut exercise) => {
                exercise.sets.push(set);
                State::InExercise(block, exercise)
            }
            other => {
                debug!(line = self.line_no, "Dropping set line with no open exercise");
                other
            }
        }
    }

    /// Any other line names a new exercise, closing the previous one.
    fn on_name(state: State, name: &str) -> State {
        match state {
            State::Idle => State::Idle,
            State::InSession(block) => State::InExercise(block, Exercise::new(name)),
            State::InExercise(mut block, exercise) => {
                block.exercises.push(exercise);
                State::InExercise(block, Exercise::new(name))
            }
        }
    }

    fn commit(&mut self, state: State) {
        let block = match state {
            State::Idle => return,
            State::InSession(block) => block,
            State::InExercise(mut block, exercise) => {
                block.exercises.push(exercise);
                block
            }
        };
        if let Some(parsed) = block.into_parsed() {
            debug!(
                date = %parsed.date,
                exercises = parsed.exercises.len(),
                "Committed block"
            );
            self.committed.push(parsed);
        }
    }
}

/// Parse a whole document into its committed blocks.
///
/// # Errors
///
/// Returns `InvalidSet` for a set line whose rep count overflows. Nothing is
/// returned for the blocks before it.
pub fn parse(text: &str) -> CodecResult<Vec<ParsedSession>> {
    let mut parser = Parser::new();
    for line in text.split('\n') {
        parser.feed(line)?;
    }
    Ok(parser.finish())
}
