//! Roadmap node states derived from a plan.
//!
//! Each day of a plan becomes one node on the roadmap. A node is
//! `completed` when its day carries a completion timestamp, `current` when it
//! is the first day or its predecessor is completed, and `locked` otherwise.
//! The rule is evaluated per day without looking further back, so a plan with
//! inconsistent completion data can show more than one `current` node.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Day, Plan};

/// Unlock/progress status of a day on the roadmap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// Waiting for the previous day to be completed
    Locked,
    /// Unlocked and not yet completed
    Current,
    /// Finished
    Completed,
}

impl NodeState {
    /// Lowercase name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Locked => "locked",
            NodeState::Current => "current",
            NodeState::Completed => "completed",
        }
    }
}

/// Icon drawn inside a roadmap node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "kind", content = "day")]
pub enum NodeIcon {
    /// Checkmark for completed days
    Check,
    /// Day number for the current day
    DayNumber(u32),
    /// Padlock for locked days
    Lock,
    /// Crown on the final day while it is still locked
    Crown,
}

impl fmt::Display for NodeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIcon::Check => write!(f, "✓"),
            NodeIcon::DayNumber(n) => write!(f, "{n}"),
            NodeIcon::Lock => write!(f, "🔒"),
            NodeIcon::Crown => write!(f, "👑"),
        }
    }
}

/// A day as placed on the roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapNode<'a> {
    /// Position of the day in the plan (0-based)
    pub day_index: usize,
    /// The day this node represents
    pub day: &'a Day,
    /// Derived state
    pub state: NodeState,
    /// Icon to draw
    pub icon: NodeIcon,
}

impl RoadmapNode<'_> {
    /// Label under the node (the day name).
    pub fn label(&self) -> &str {
        &self.day.day_name
    }

    /// Whether the node may be opened. Locked nodes must not lead to a
    /// toggle.
    pub fn is_selectable(&self) -> bool {
        self.state != NodeState::Locked
    }

    /// Whether this is the last day of the plan.
    pub fn is_final(&self, plan_len: usize) -> bool {
        self.day_index + 1 == plan_len
    }
}

/// State of a day given its predecessor (`None` for the first day).
pub fn node_state(day: &Day, previous: Option<&Day>) -> NodeState {
    if day.is_completed() {
        NodeState::Completed
    } else if previous.map_or(true, Day::is_completed) {
        NodeState::Current
    } else {
        NodeState::Locked
    }
}

/// Derive the state of every day in the plan. An empty plan yields an empty
/// sequence.
pub fn derive(plan: &Plan) -> Vec<NodeState> {
    plan.days
        .iter()
        .enumerate()
        .map(|(i, day)| node_state(day, i.checked_sub(1).map(|p| &plan.days[p])))
        .collect()
}

/// Derive the full roadmap nodes, including icons.
pub fn derive_nodes(plan: &Plan) -> Vec<RoadmapNode<'_>> {
    let last = plan.len().saturating_sub(1);
    derive(plan)
        .into_iter()
        .zip(&plan.days)
        .enumerate()
        .map(|(day_index, (state, day))| {
            let icon = match state {
                NodeState::Completed => NodeIcon::Check,
                NodeState::Current => NodeIcon::DayNumber(day.day_number),
                NodeState::Locked if day_index == last => NodeIcon::Crown,
                NodeState::Locked => NodeIcon::Lock,
            };
            RoadmapNode {
                day_index,
                day,
                state,
                icon,
            }
        })
        .collect()
}
