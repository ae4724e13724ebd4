//! The roadmap view.

use std::fmt;

use super::{datetime::LocalDate, status::LOADING_MESSAGE};
use crate::{
    models::Plan,
    roadmap::{self, NodeState, RoadmapNode},
};

/// Wrapper type for displaying a plan as a roadmap of day nodes.
///
/// Each node shows its icon, its label and the day's details: estimated
/// time, calories, the number of exercises and, for finished days, the
/// completion date. Locked days are dimmed. An empty plan shows the loading
/// placeholder.
///
/// # Examples
///
/// ```rust
/// use burrow_core::{display::Roadmap, models::Plan};
///
/// let plan = Plan::default();
/// let output = Roadmap::with_title(&plan, "Tom's Tunnel").to_string();
/// assert!(output.contains("Loading excavation plan..."));
/// ```
pub struct Roadmap<'a> {
    plan: &'a Plan,
    title: Option<&'a str>,
}

impl<'a> Roadmap<'a> {
    /// Create a new Roadmap wrapper.
    pub fn new(plan: &'a Plan) -> Self {
        Self { plan, title: None }
    }

    /// Create a Roadmap with a title header.
    pub fn with_title(plan: &'a Plan, title: &'a str) -> Self {
        Self {
            plan,
            title: Some(title),
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: &RoadmapNode<'_>) -> fmt::Result {
        let day = node.day;
        match node.state {
            NodeState::Locked => writeln!(f, "- `{}` ~~{}~~ (locked)", node.icon, day)?,
            NodeState::Current => writeln!(f, "- `{}` **{}** (current)", node.icon, day)?,
            NodeState::Completed => writeln!(f, "- `{}` **{}**", node.icon, day)?,
        }

        let mut details = Vec::new();
        if !day.estimated_workout_time.is_empty() {
            details.push(format!("⏱️ {}", day.estimated_workout_time));
        }
        if !day.suggested_calorie_intake.is_empty() {
            details.push(format!("🍽️ {} kcal", day.suggested_calorie_intake));
        }
        details.push(match day.exercises.len() {
            1 => "1 exercise".to_string(),
            n => format!("{n} exercises"),
        });
        if let Some(completed) = &day.date_completed {
            details.push(format!("✅ completed {}", LocalDate(completed)));
        }
        writeln!(f, "  - {}", details.join(" · "))?;

        if node.is_final(self.plan.len()) {
            writeln!(f, "  - 💎 Treasure chamber")?;
        }
        Ok(())
    }
}

impl fmt::Display for Roadmap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.plan.is_empty() {
            return writeln!(f, "{LOADING_MESSAGE}");
        }

        for node in roadmap::derive_nodes(self.plan) {
            self.fmt_node(f, &node)?;
        }
        Ok(())
    }
}
