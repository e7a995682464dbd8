//! Error types for liftlog.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Context-aware recovery hints
//! - Structured JSON output for host applications that surface errors

use thiserror::Error;

/// Result type alias for liftlog operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Storage
    DatabaseError,
    IoError,
    JsonError,

    // Validation
    InvalidDate,
    InvalidArgument,
    ParseError,

    // Config
    ConfigError,

    // Internal
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ParseError => "PARSE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether resubmitting with corrected input can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate | Self::InvalidArgument | Self::ParseError
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in liftlog operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidDate { .. } => ErrorCode::InvalidDate,
            Self::Parse { .. } => ErrorCode::ParseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidDate { .. } => {
                Some("Dates use the calendar form YYYY-MM-DD, e.g. 2024-01-15".to_string())
            }
            Self::Parse { .. } => Some(
                "Set lines are a rep count, optionally followed by ' x <weight>kg', e.g. '10 x 15kg'"
                    .to_string(),
            ),
            Self::Database(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::InvalidArgument(_)
            | Self::Config(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = Error::InvalidDate {
            value: "2024-13-01".to_string(),
        };
        assert_eq!(err.error_code(), ErrorCode::InvalidDate);
        assert!(err.error_code().is_retryable());

        let err = Error::Other("boom".to_string());
        assert_eq!(err.error_code().as_str(), "INTERNAL_ERROR");
        assert!(!err.error_code().is_retryable());
    }

    #[test]
    fn test_structured_json_includes_hint() {
        let err = Error::Parse {
            line: 7,
            message: "reps out of range".to_string(),
        };
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "PARSE_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Parse error at line 7: reps out of range"
        );
        assert!(json["error"]["hint"].is_string());
    }

    #[test]
    fn test_structured_json_without_hint() {
        let err = Error::Config("bad path".to_string());
        let json = err.to_structured_json();
        assert!(json["error"].get("hint").is_none());
    }
}
