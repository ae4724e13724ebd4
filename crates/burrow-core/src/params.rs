//! Parameter structures for burrow operations.
//!
//! These structures are shared by the CLI and the MCP server without carrying
//! framework-specific derives. Interface layers wrap them (clap `Args` in the
//! CLI, a transparent serde wrapper with `JsonSchema` in MCP) and convert
//! into these types before calling the [`Session`](crate::Session).
//!
//! Day and exercise numbers are 1-based here, as a person reads them off
//! the roadmap. The accessor methods convert them to 0-based indices.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{BurrowError, Result};

/// Parameters selecting one day of the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DayRef {
    /// Day number, starting at 1
    pub day: u32,
}

impl DayRef {
    /// 0-based index of the day.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::InvalidInput` if `day` is 0.
    pub fn day_index(&self) -> Result<usize> {
        one_based("day", self.day)
    }
}

/// Parameters for ticking an exercise on or off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleExercise {
    /// Day number, starting at 1
    pub day: u32,
    /// Exercise number within the day, starting at 1
    pub exercise: u32,
}

impl ToggleExercise {
    /// The day this toggle applies to.
    pub fn day_ref(&self) -> DayRef {
        DayRef { day: self.day }
    }

    /// 0-based index of the exercise.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::InvalidInput` if `exercise` is 0.
    pub fn exercise_index(&self) -> Result<usize> {
        one_based("exercise", self.exercise)
    }
}

fn one_based(field: &str, value: u32) -> Result<usize> {
    match value {
        0 => Err(BurrowError::invalid_input(field).with_reason("numbering starts at 1")),
        n => Ok(n as usize - 1),
    }
}
