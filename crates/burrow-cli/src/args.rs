//! Command-line interface definitions using clap.
//!
//! Argument structs carry the clap-specific attributes and convert into the
//! core parameter types with `From`, so the core never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```

use std::path::PathBuf;

use burrow_core::params::{DayRef, ToggleExercise};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Cave-themed workout roadmap in the terminal
///
/// Fetches a user's workout plan and shows it as a roadmap of days that
/// unlock one after another. Exercises can be ticked off, progress and
/// levels are shown on the stats card, and the same views are available to
/// AI assistants through the MCP server.
#[derive(Parser)]
#[command(version, about, name = "burrow")]
pub struct Args {
    /// Account whose plan is fetched. Defaults to the config file value,
    /// then "tomcat"
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Base URL of the coaching backend
    #[arg(long, global = true, conflicts_with = "document")]
    pub base_url: Option<String>,

    /// Read the user document from a local JSON file instead of the backend
    #[arg(long, global = true)]
    pub document: Option<PathBuf>,

    /// Path to the config file. Defaults to $XDG_CONFIG_HOME/burrow/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the roadmap is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the roadmap of all days
    #[command(alias = "r")]
    Roadmap,
    /// Show one day with its exercises
    #[command(alias = "d")]
    Day(DayArgs),
    /// Show level, experience and completion counters
    #[command(alias = "s")]
    Stats,
    /// Tick exercises of a day on or off
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Watch the cave mole
    Mole(MoleArgs),
    /// Start the MCP server
    Serve,
}

/// Select a day of the plan
#[derive(ClapArgs)]
pub struct DayArgs {
    #[arg(help = "Day number as shown on the roadmap, starting at 1")]
    pub day: u32,
}

impl From<DayArgs> for DayRef {
    fn from(val: DayArgs) -> Self {
        DayRef { day: val.day }
    }
}

/// Tick exercises on or off
///
/// Each listed exercise is toggled in turn, so listing an exercise twice
/// leaves it unchanged. A day is completed once all of its exercises are.
#[derive(ClapArgs)]
pub struct ToggleArgs {
    #[arg(help = "Day number as shown on the roadmap, starting at 1")]
    pub day: u32,
    #[arg(
        required = true,
        help = "Exercise numbers within the day, starting at 1"
    )]
    pub exercises: Vec<u32>,
    #[arg(long, help = "Print the updated user document as JSON")]
    pub json: bool,
}

impl ToggleArgs {
    /// One toggle per listed exercise, in order.
    pub fn toggles(&self) -> Vec<ToggleExercise> {
        self.exercises
            .iter()
            .map(|&exercise| ToggleExercise {
                day: self.day,
                exercise,
            })
            .collect()
    }
}

/// Animate the mole
#[derive(ClapArgs)]
pub struct MoleArgs {
    #[arg(long, default_value_t = 40, help = "Number of frames to show")]
    pub ticks: u32,
    #[arg(long, help = "Send the mole to the punching bag first")]
    pub punch: bool,
    #[arg(
        long,
        default_value_t = 200,
        help = "Milliseconds between frames"
    )]
    pub interval_ms: u64,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_toggle_args_expand_in_order() {
        let args = Args::parse_from(["burrow", "toggle", "2", "3", "1"]);
        let Some(Commands::Toggle(toggle)) = args.command else {
            panic!("expected toggle command");
        };
        let toggles = toggle.toggles();
        assert_eq!(toggles.len(), 2);
        assert_eq!((toggles[0].day, toggles[0].exercise), (2, 3));
        assert_eq!((toggles[1].day, toggles[1].exercise), (2, 1));
    }

    #[test]
    fn test_base_url_conflicts_with_document() {
        let result = Args::try_parse_from([
            "burrow",
            "--base-url",
            "http://localhost:5000",
            "--document",
            "plan.json",
        ]);
        assert!(result.is_err());
    }
}
