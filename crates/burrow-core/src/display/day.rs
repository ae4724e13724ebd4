//! The day details view.

use std::fmt;

use super::{datetime::LocalDateTime, progress_bar};
use crate::{models::Day, roadmap::NodeState, stats::DayProgress};

/// Wrapper type for displaying one day with its exercise checklist.
///
/// The view shows the day header, the estimated time and calories, a
/// progress bar, every exercise with its sets, reps and instructions, and a
/// "Day Complete!" banner once the day carries a completion timestamp.
pub struct DayDetails<'a> {
    day: &'a Day,
    state: Option<NodeState>,
}

impl<'a> DayDetails<'a> {
    /// Create a new DayDetails wrapper.
    pub fn new(day: &'a Day) -> Self {
        Self { day, state: None }
    }

    /// Also show the day's roadmap state.
    pub fn with_state(day: &'a Day, state: NodeState) -> Self {
        Self {
            day,
            state: Some(state),
        }
    }
}

impl fmt::Display for DayDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.day;
        writeln!(f, "# {}", day.day_name)?;
        writeln!(f)?;

        writeln!(f, "- Day: {}", day.day_number)?;
        if let Some(state) = self.state {
            writeln!(f, "- State: {state}")?;
        }
        if !day.estimated_workout_time.is_empty() {
            writeln!(f, "- Estimated time: {}", day.estimated_workout_time)?;
        }
        if !day.suggested_calorie_intake.is_empty() {
            writeln!(f, "- Suggested calories: {}", day.suggested_calorie_intake)?;
        }

        let progress = DayProgress::of(day);
        writeln!(f)?;
        writeln!(
            f,
            "Progress: `{}` {}%",
            progress_bar(progress.percent()),
            progress.percent()
        )?;

        writeln!(f)?;
        writeln!(f, "## 🏋️ Exercises")?;
        writeln!(f)?;
        if day.exercises.is_empty() {
            writeln!(f, "No exercises for this day.")?;
        }
        for exercise in &day.exercises {
            write!(f, "{exercise}")?;
        }

        if let Some(completed) = &day.date_completed {
            writeln!(f)?;
            writeln!(f, "🎉 **Day Complete!** All exercises finished - great work!")?;
            writeln!(f, "Completed: {}", LocalDateTime(completed))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}/{} exercises completed",
            progress.completed, progress.total
        )
    }
}
