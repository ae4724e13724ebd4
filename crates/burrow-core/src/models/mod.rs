//! Data models for user profiles and their workout plans.
//!
//! This module contains the domain records that a fetched user document is
//! parsed into. The tree is strictly owned top-down:
//!
//! ```text
//! UserProfile ──▶ Plan ──▶ Day ──▶ Exercise
//! ```
//!
//! There are no back references. A snapshot of the whole tree is replaced
//! wholesale on every mutation, so the records here are plain values with
//! `Clone` and no interior mutability.
//!
//! Field names on the wire are hyphenated (`first-name`, `day-number`,
//! `date-completed`, ...). The serde attributes on each record map them onto
//! Rust field names; use [`crate::document`] to parse a document with proper
//! schema errors instead of calling `serde_json` directly.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use burrow_core::models::{Day, Exercise};
//!
//! let day = Day {
//!     day_number: 1,
//!     day_name: "Push".to_string(),
//!     estimated_workout_time: "45 minutes".to_string(),
//!     suggested_calorie_intake: "2200".to_string(),
//!     date_completed: None,
//!     exercises: vec![Exercise::new("Push-ups", 3, 12)],
//! };
//! assert!(!day.is_completed());
//! assert_eq!(day.completed_exercises(), 0);
//! ```

pub mod day;
pub mod exercise;
pub mod profile;
mod wire;


pub use day::{Day, REST_DAY_NAME};
pub use exercise::Exercise;
pub use profile::{Plan, UserProfile};
