//! Display implementations for domain models.
//!
//! These are the compact forms, used inside lists and log lines. The wrappers
//! in the sibling modules build the full views on top of them.

use std::fmt;

use crate::{
    models::{Day, Exercise},
    roadmap::NodeState,
};

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Exercise {
    /// A markdown checklist entry with sets, reps and instructions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        writeln!(
            f,
            "- [{mark}] **{}**: Sets: {}, Reps: {}",
            self.name, self.sets, self.reps
        )?;
        if !self.instructions.is_empty() {
            writeln!(f, "  - Instructions: {}", self.instructions)?;
        }
        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day_number, self.day_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_checklist_entry() {
        let open = Exercise::new("Squats", 4, 10).with_instructions("Keep your back straight");
        let output = open.to_string();
        assert!(output.starts_with("- [ ] **Squats**: Sets: 4, Reps: 10"));
        assert!(output.contains("Instructions: Keep your back straight"));

        let done = Exercise::new("Plank", 3, 1).completed();
        let output = done.to_string();
        assert!(output.starts_with("- [x] **Plank**"));
        assert!(!output.contains("Instructions"));
    }

    #[test]
    fn test_day_and_state_labels() {
        let day = Day {
            day_number: 3,
            day_name: "Legs".to_string(),
            estimated_workout_time: String::new(),
            suggested_calorie_intake: String::new(),
            date_completed: None,
            exercises: vec![],
        };
        assert_eq!(day.to_string(), "Day 3: Legs");
        assert_eq!(NodeState::Current.to_string(), "current");
    }
}
