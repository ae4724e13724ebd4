//! Exercise completion reducer.
//!
//! Toggling an exercise never mutates the day it is given. It returns a new
//! [`Day`] with the flag flipped and the day-level completion timestamp
//! recomputed; [`splice_day`] then builds the next [`UserProfile`] snapshot
//! around it.
//!
//! Day-level propagation after the flip:
//!
//! 1. every exercise completed and no timestamp yet, **or** the day is named
//!    `"Rest"`: stamp the day with `now`;
//! 2. otherwise, not every exercise completed but a timestamp present: clear
//!    it;
//! 3. otherwise leave the timestamp alone.
//!
//! The `"Rest"` clause applies on every toggle, including one that un-ticks
//! an exercise, so a rest day is re-stamped each time.

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{BurrowError, Result},
    models::{Day, Plan, UserProfile},
};

/// Toggle one exercise using the wall clock for a new completion timestamp.
///
/// # Errors
///
/// Returns `BurrowError::IndexOutOfRange` if `exercise_index` does not refer
/// to an exercise of `day`.
pub fn toggle(day: &Day, exercise_index: usize) -> Result<Day> {
    toggle_at(day, exercise_index, Timestamp::now())
}

/// Toggle one exercise, stamping a completed day with `now`.
///
/// # Errors
///
/// Returns `BurrowError::IndexOutOfRange` if `exercise_index` does not refer
/// to an exercise of `day`.
pub fn toggle_at(day: &Day, exercise_index: usize, now: Timestamp) -> Result<Day> {
    let len = day.exercises.len();
    if exercise_index >= len {
        return Err(BurrowError::IndexOutOfRange {
            index: exercise_index,
            len,
        });
    }

    let mut next = day.clone();
    let exercise = &mut next.exercises[exercise_index];
    exercise.completed = !exercise.completed;

    let all_completed = next.all_exercises_completed();
    let had_timestamp = next.date_completed.is_some();

    if (all_completed && !had_timestamp) || day.is_rest_day() {
        next.date_completed = Some(now);
    } else if !all_completed && had_timestamp {
        next.date_completed = None;
    }

    debug!(
        "toggled exercise {} of day {} to {}; day completed: {}",
        exercise_index,
        next.day_number,
        next.exercises[exercise_index].completed,
        next.is_completed()
    );

    Ok(next)
}

/// Build the next profile snapshot with `day` placed at `day_index`.
///
/// # Errors
///
/// Returns `BurrowError::NotLoaded` if the profile has no plan and
/// `BurrowError::DayNotFound` if `day_index` is outside the plan.
pub fn splice_day(profile: &UserProfile, day_index: usize, day: Day) -> Result<UserProfile> {
    let plan = profile.plan.as_ref().ok_or(BurrowError::NotLoaded)?;
    if day_index >= plan.len() {
        return Err(BurrowError::DayNotFound {
            day: day_index + 1,
            len: plan.len(),
        });
    }

    let mut days = plan.days.clone();
    days[day_index] = day;

    Ok(UserProfile {
        plan: Some(Plan::new(days)),
        ..profile.clone()
    })
}
