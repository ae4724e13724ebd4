//! Day model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{wire, Exercise};

/// Day name that marks a rest day in generated plans.
pub const REST_DAY_NAME: &str = "Rest";

/// One scheduled day within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    /// Position of the day in the plan (1-based)
    #[serde(rename = "day-number")]
    pub day_number: u32,

    /// Label shown on the roadmap node, e.g. "Push" or "Rest"
    #[serde(rename = "day-name")]
    pub day_name: String,

    /// Free-form duration estimate, e.g. "45 minutes"
    #[serde(
        rename = "estimated-workout-time",
        default,
        deserialize_with = "wire::string_or_number"
    )]
    pub estimated_workout_time: String,

    /// Suggested calories for the day; numbers from the generator are kept as
    /// text
    #[serde(
        rename = "suggested-calorie-intake",
        default,
        deserialize_with = "wire::string_or_number"
    )]
    pub suggested_calorie_intake: String,

    /// When the day was fully completed; `None` while in progress
    #[serde(rename = "date-completed", default, with = "wire::completion_time")]
    pub date_completed: Option<Timestamp>,

    /// Exercises in prescribed order
    #[serde(rename = "workouts", default)]
    pub exercises: Vec<Exercise>,
}

impl Day {
    /// Whether the day carries a completion timestamp.
    pub fn is_completed(&self) -> bool {
        self.date_completed.is_some()
    }

    /// Whether this is a rest day. Matching is exact, as in the generated
    /// plans.
    pub fn is_rest_day(&self) -> bool {
        self.day_name == REST_DAY_NAME
    }

    /// Number of exercises ticked off.
    pub fn completed_exercises(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    /// Whether every exercise is ticked off. Vacuously true for a day without
    /// exercises.
    pub fn all_exercises_completed(&self) -> bool {
        self.exercises.iter().all(|e| e.completed)
    }
}
