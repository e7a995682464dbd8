//! Configuration management.
//!
//! Resolves where the workout log lives and which backend opens it.
//!
//! # Layout
//!
//! - **Data**: `~/.liftlog/data/workouts.json` by default
//! - **Test data**: `~/.liftlog/test/workouts.json` when `LIFTLOG_TEST_DATA` is set
//!
//! The backend follows the file extension: `.db`, `.sqlite` and `.sqlite3`
//! open a [`SqliteStore`], anything else a [`JsonFileStore`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::{JsonFileStore, SqliteStore, Store};

/// Environment variable overriding the data file location.
pub const DATA_ENV: &str = "LIFTLOG_DATA";
/// Environment variable redirecting to the isolated test data file.
pub const TEST_DATA_ENV: &str = "LIFTLOG_TEST_DATA";

const DATA_FILE: &str = "workouts.json";

/// Get the global liftlog directory, `~/.liftlog/`.
#[must_use]
pub fn global_liftlog_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".liftlog"))
}

/// Check if test mode is enabled.
///
/// Enabled by setting `LIFTLOG_TEST_DATA` to anything other than empty,
/// `0` or `false`.
#[must_use]
pub fn is_test_mode() -> bool {
    std::env::var(TEST_DATA_ENV).is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

/// Get the test data path, `~/.liftlog/test/workouts.json`.
#[must_use]
pub fn test_data_path() -> Option<PathBuf> {
    global_liftlog_dir().map(|dir| dir.join("test").join(DATA_FILE))
}

/// Resolve the data file path.
///
/// Priority:
/// 1. `explicit_path`, if provided
/// 2. `LIFTLOG_TEST_DATA` → test data file
/// 3. `LIFTLOG_DATA`
/// 4. `~/.liftlog/data/workouts.json`
///
/// # Errors
///
/// Returns `Config` if no home directory can be determined and nothing
/// more specific was given.
pub fn resolve_data_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    resolve_with(
        explicit_path,
        is_test_mode(),
        std::env::var(DATA_ENV).ok().as_deref(),
    )
}

fn resolve_with(
    explicit_path: Option<&Path>,
    test_mode: bool,
    env_path: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    let no_home = || Error::Config("could not determine home directory".to_string());

    if test_mode {
        return test_data_path().ok_or_else(no_home);
    }

    if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    global_liftlog_dir()
        .map(|dir| dir.join("data").join(DATA_FILE))
        .ok_or_else(no_home)
}

/// Persistence backend for a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Json,
    Sqlite,
}

impl StoreBackend {
    /// Pick the backend from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("db" | "sqlite" | "sqlite3") => Self::Sqlite,
            _ => Self::Json,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Open the store for `path` with the backend its extension selects.
///
/// # Errors
///
/// Returns an error if the SQLite database cannot be opened. JSON stores
/// open lazily and never fail here.
pub fn open_store(path: &Path) -> Result<Box<dyn Store>> {
    let backend = StoreBackend::from_path(path);
    debug!(path = %path.display(), backend = backend.as_str(), "Opening store");

    let store: Box<dyn Store> = match backend {
        StoreBackend::Json => Box::new(JsonFileStore::new(path)),
        StoreBackend::Sqlite => Box::new(SqliteStore::open(path)?),
    };
    Ok(store)
}

/// Resolve the data path and open it.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the store cannot be
/// opened.
pub fn open_default_store(explicit_path: Option<&Path>) -> Result<Box<dyn Store>> {
    open_store(&resolve_data_path(explicit_path)?)
}
