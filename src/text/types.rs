//! Types shared by the text import and export paths.

use serde::Serialize;

use crate::model::Exercise;

/// Message returned for any import that fails to parse.
pub const IMPORT_FAILURE_MESSAGE: &str = "Error parsing import data. Please check the format.";

/// One `Date:` block that committed during parsing.
///
/// Only blocks with a date and at least one exercise are emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSession {
    /// Date text exactly as written after `Date:`.
    pub date: String,
    /// Exercises in text order. Names may repeat.
    pub exercises: Vec<Exercise>,
    /// Notes from the block, `None` when absent or empty.
    pub notes: Option<String>,
    /// 1-based line number of the `Date:` line.
    pub line: usize,
}

/// Per-commit statistics for an import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// Blocks that created a new session.
    pub created: usize,
    /// Blocks merged into an existing session and changed it.
    pub updated: usize,
    /// Blocks merged into an existing session without changing it.
    pub unchanged: usize,
}

impl ImportStats {
    /// Total committed blocks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged
    }
}

/// Result of an import, shaped for display by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// Whether the text parsed and was merged.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Number of committed blocks, 0 on failure.
    pub sessions_imported: usize,
    /// Breakdown of the committed blocks.
    pub stats: ImportStats,
}

impl ImportOutcome {
    /// Outcome for a successful merge.
    #[must_use]
    pub fn success(stats: ImportStats) -> Self {
        let count = stats.total();
        Self {
            success: true,
            message: format!("Successfully imported {count} workout session(s)"),
            sessions_imported: count,
            stats,
        }
    }

    /// Outcome for an import that was rejected before anything was written.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            success: false,
            message: IMPORT_FAILURE_MESSAGE.to_string(),
            sessions_imported: 0,
            stats: ImportStats::default(),
        }
    }
}

/// Statistics for an export operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Number of sessions written.
    pub sessions: usize,
    /// Number of exercises written.
    pub exercises: usize,
    /// Number of set lines written.
    pub sets: usize,
}

/// Text codec errors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// IO error while reading or writing a text file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A set line that matches the set pattern but cannot be represented.
    #[error("Invalid set at line {line}: {message}")]
    InvalidSet {
        /// Line number (1-indexed).
        line: usize,
        /// Error message.
        message: String,
    },
}

impl From<CodecError> for crate::error::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(e) => Self::Io(e),
            CodecError::InvalidSet { line, message } => Self::Parse { line, message },
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
