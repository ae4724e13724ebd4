//! Markdown presentation of roadmaps, days and stats.
//!
//! Domain models implement [`std::fmt::Display`] directly for their compact
//! forms; the wrappers in this module format the same data for a specific
//! view (the roadmap, the day modal, the stats card, a toggle confirmation).
//! Every formatter produces markdown, rendered by the CLI's terminal renderer
//! or returned verbatim from MCP tools.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │  (Plan, Day)    │───▶│    Types        │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`roadmap`]: the roadmap of day nodes ([`Roadmap`])
//! - [`day`]: a single day with its exercise checklist ([`DayDetails`])
//! - [`stats`]: the welcome and progress card ([`StatsCard`])
//! - [`results`]: toggle confirmations ([`ToggleResult`])
//! - [`status`]: the not-loaded placeholder ([`LoadingPlaceholder`])
//! - [`datetime`]: timestamp formatting in the system timezone
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use burrow_core::{
//!     display::{DayDetails, Roadmap},
//!     models::{Day, Exercise, Plan},
//! };
//!
//! let day = Day {
//!     day_number: 1,
//!     day_name: "Upper Body".to_string(),
//!     estimated_workout_time: "45 minutes".to_string(),
//!     suggested_calorie_intake: "2200".to_string(),
//!     date_completed: None,
//!     exercises: vec![Exercise::new("Push-ups", 3, 12)],
//! };
//! let plan = Plan::new(vec![day]);
//!
//! let roadmap = format!("{}", Roadmap::new(&plan));
//! assert!(roadmap.contains("Day 1: Upper Body"));
//!
//! let details = format!("{}", DayDetails::new(&plan.days[0]));
//! assert!(details.contains("Push-ups"));
//! ```

pub mod datetime;
pub mod day;
pub mod models;
pub mod results;
pub mod roadmap;
pub mod stats;
pub mod status;

pub use datetime::{LocalDate, LocalDateTime};
pub use day::DayDetails;
pub use results::ToggleResult;
pub use roadmap::Roadmap;
pub use stats::StatsCard;
pub use status::{LoadingPlaceholder, LOADING_MESSAGE};

/// Width, in cells, of the text progress bars.
const BAR_WIDTH: usize = 20;

/// Draw a text progress bar. Values above 100 are drawn full.
pub(crate) fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
