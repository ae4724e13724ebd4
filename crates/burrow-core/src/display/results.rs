//! Toggle confirmations.

use std::fmt;

use super::day::DayDetails;
use crate::models::Day;

/// Wrapper type for displaying the outcome of an exercise toggle.
///
/// Names the exercise and its new state, then shows the updated day.
///
/// # Examples
///
/// ```rust
/// use burrow_core::{display::ToggleResult, models::{Day, Exercise}};
///
/// let day = Day {
///     day_number: 1,
///     day_name: "Upper Body".to_string(),
///     estimated_workout_time: "45 minutes".to_string(),
///     suggested_calorie_intake: "2200".to_string(),
///     date_completed: None,
///     exercises: vec![Exercise::new("Push-ups", 3, 12).completed()],
/// };
///
/// let output = ToggleResult::new(&day, 0).to_string();
/// assert!(output.contains("Marked **Push-ups** as done"));
/// ```
pub struct ToggleResult<'a> {
    day: &'a Day,
    exercise_index: usize,
}

impl<'a> ToggleResult<'a> {
    /// Create a new ToggleResult for the exercise at `exercise_index`
    /// (0-based) of the updated `day`.
    pub fn new(day: &'a Day, exercise_index: usize) -> Self {
        Self {
            day,
            exercise_index,
        }
    }
}

impl fmt::Display for ToggleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(exercise) = self.day.exercises.get(self.exercise_index) {
            let state = if exercise.completed { "done" } else { "not done" };
            writeln!(
                f,
                "Marked **{}** as {state} on {}",
                exercise.name, self.day
            )?;
            writeln!(f)?;
        }
        write!(f, "{}", DayDetails::new(self.day))
    }
}
