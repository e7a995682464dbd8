//! Data models for liftlog.
//!
//! This module contains all domain models:
//! - WorkoutSet
//! - Exercise
//! - WorkoutSession
//! - WorkoutData
//! - SessionIndex (date lookup over a session list)

pub mod index;
pub mod workout;

pub use index::SessionIndex;
pub use workout::{CURRENT_VERSION, Exercise, WorkoutData, WorkoutSession, WorkoutSet};
