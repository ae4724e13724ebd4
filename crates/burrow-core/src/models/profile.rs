//! User profile and plan models.

use serde::{Deserialize, Serialize};

use super::Day;

/// The full multi-day workout schedule for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Days in chronological order; index 0 is day 1
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Plan {
    /// Create a plan from its days.
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Number of days in the plan.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan has no days yet.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day at the given index, if any.
    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }
}

/// A user as returned by `GET /getuser`, owning at most one plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Name used in the welcome banner
    #[serde(rename = "first-name")]
    pub first_name: String,

    /// Account name the profile was fetched with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Plan duration in days
    #[serde(default)]
    pub days: u32,

    /// Intensity label, e.g. "Moderate"
    #[serde(default)]
    pub intensity: String,

    /// The generated plan; `None` until one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

impl UserProfile {
    /// Whether the profile carries a plan with at least one day.
    pub fn has_plan(&self) -> bool {
        self.plan.as_ref().is_some_and(|plan| !plan.is_empty())
    }
}
