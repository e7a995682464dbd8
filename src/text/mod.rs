//! Plain-text interchange for workout logs.
//!
//! - **Export**: sessions → `Workout Log` text, one `Date:` block per session
//! - **Import**: text → parsed blocks → date-keyed merge into the stored log
//! - **Hashing**: SHA256 content hashing to tell updated merges from no-ops
//!
//! # Format
//!
//! ```text
//! Workout Log
//!
//! Date: 2024-01-15
//! Notes: optional
//!
//! Pushups
//! 40
//! 40
//!
//! Biceps
//! 10 x 15kg
//!
//! ---
//!
//! ```
//!
//! # Example
//!
//! ```ignore
//! use liftlog::storage::MemoryStore;
//! use liftlog::text::{Exporter, Importer};
//!
//! let mut store = MemoryStore::new();
//! let outcome = Importer::new(&mut store).import_text(text);
//! let rendered = Exporter::new(&store).export_text();
//! ```

mod export;
mod hash;
mod import;
mod parser;
mod types;

pub use export::{
    Exporter, HEADER, export_as_text, export_filename, export_filename_today, export_stats,
    format_set,
};
pub use hash::{content_hash, session_content_hash};
pub use import::{Importer, import_into};
pub use parser::{LineKind, Parser, StateKind, classify, parse};
pub use types::{
    CodecError, CodecResult, ExportStats, IMPORT_FAILURE_MESSAGE, ImportOutcome, ImportStats,
    ParsedSession,
};
