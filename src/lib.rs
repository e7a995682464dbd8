//! liftlog - workout logging core
//!
//! An embedded library for recording strength workouts: sessions per calendar
//! day, exercises within a session, sets within an exercise. It persists the
//! log as a single blob, exchanges it as plain text and answers the
//! analytics questions a logging UI asks.
//!
//! # Architecture
//!
//! - [`model`] - Data types (WorkoutSet, Exercise, WorkoutSession, WorkoutData)
//! - [`storage`] - Store trait with memory, JSON file and SQLite backends
//! - [`text`] - Plain-text export and merge-on-import
//! - [`analytics`] - Streaks, progress series, comparisons, heatmap
//! - [`config`] - Data path resolution and backend selection
//! - [`validate`] - Date and form-input parsing
//! - [`logging`] - Optional tracing subscriber setup
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod text;
pub mod validate;

pub use error::{Error, Result};
