//! The stats card.

use std::fmt;

use super::progress_bar;
use crate::{
    models::UserProfile,
    stats::{self, Stats},
};

/// Wrapper type for displaying the welcome line and progress counters of a
/// profile.
pub struct StatsCard<'a> {
    profile: &'a UserProfile,
    stats: Stats,
}

impl<'a> StatsCard<'a> {
    /// Create a card for `profile`, computing its stats.
    pub fn new(profile: &'a UserProfile) -> Self {
        Self {
            profile,
            stats: stats::aggregate_profile(profile),
        }
    }

    /// The counters shown on the card.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl fmt::Display for StatsCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;
        let stats = &self.stats;

        writeln!(f, "# Welcome back, {}", profile.first_name)?;
        writeln!(f)?;
        if !profile.intensity.is_empty() {
            writeln!(f, "{} day, {} Intensity plan", profile.days, profile.intensity)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "- **Days Completed**: {}/{}",
            stats.completed_days, stats.total_days
        )?;
        write!(
            f,
            "- **Workouts Finished**: {}/{}",
            stats.completed_workouts, stats.total_workouts
        )?;
        if stats.total_workouts > 0 {
            let percent = (stats.completed_workouts as f64 / stats.total_workouts as f64 * 100.0)
                .round() as u32;
            write!(f, " ({percent}% complete)")?;
        }
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "## ⛏️ Tunnel Level {}", stats.level)?;
        writeln!(f)?;
        writeln!(
            f,
            "EXP `{}` {}/{}",
            progress_bar(stats.exp_percent()),
            stats.current_exp,
            stats.max_exp
        )
    }
}
