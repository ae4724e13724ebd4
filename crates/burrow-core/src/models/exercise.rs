//! Exercise model definition.

use serde::{Deserialize, Serialize};

use super::wire;

/// One prescribed movement within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Name of the movement
    pub name: String,

    /// Number of sets
    pub sets: u32,

    /// Repetitions per set
    pub reps: u32,

    /// How to perform the movement
    #[serde(default)]
    pub instructions: String,

    /// Whether the exercise has been ticked off. Serialized as `true` or
    /// `null`; the document never carries an explicit `false`.
    #[serde(default, with = "wire::completed_flag")]
    pub completed: bool,
}

impl Exercise {
    /// Create an uncompleted exercise without instructions.
    pub fn new(name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            instructions: String::new(),
            completed: false,
        }
    }

    /// Set the instructions text.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Mark the exercise as completed.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}
