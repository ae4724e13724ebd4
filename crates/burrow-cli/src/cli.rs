//! Command handlers for the terminal front end.

use std::time::Duration;

use anyhow::{Context, Result};
use burrow_core::{
    display::{DayDetails, LoadingPlaceholder, Roadmap, StatsCard, ToggleResult},
    document,
    params::DayRef,
    Mole, Session,
};
use log::debug;

use crate::{
    args::{MoleArgs, ToggleArgs},
    renderer::TerminalRenderer,
};

/// Runs one command against a session and renders the result.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Fetch the plan. On failure the loading placeholder is shown along
    /// with the error, and the error is returned.
    pub async fn load(&mut self) -> Result<()> {
        if let Err(e) = self.session.load().await {
            self.render_placeholder();
            return Err(e).with_context(|| {
                format!(
                    "Failed to load the plan of {} from {}",
                    self.session.username(),
                    self.session.source()
                )
            });
        }
        Ok(())
    }

    fn render_placeholder(&self) {
        let placeholder = LoadingPlaceholder::with_error(self.session.last_error());
        self.renderer.render(&placeholder.to_string());
    }

    /// Show the roadmap of all days.
    pub fn show_roadmap(&self) -> Result<()> {
        if !self.session.is_loaded() {
            self.render_placeholder();
            return Ok(());
        }

        let profile = self.session.profile()?;
        let title = format!("{}'s Excavation Roadmap", profile.first_name);
        let roadmap = Roadmap::with_title(self.session.plan()?, &title);
        self.renderer.render(&roadmap.to_string());
        Ok(())
    }

    /// Show one day with its exercises.
    pub fn show_day(&self, params: &DayRef) -> Result<()> {
        if !self.session.is_loaded() {
            self.render_placeholder();
            return Ok(());
        }

        let day = self
            .session
            .day(params)
            .with_context(|| format!("Failed to show day {}", params.day))?;
        let state = self.session.day_state(params)?;
        self.renderer
            .render(&DayDetails::with_state(day, state).to_string());
        Ok(())
    }

    /// Show the stats card.
    pub fn show_stats(&self) -> Result<()> {
        let profile = self.session.profile()?;
        self.renderer.render(&StatsCard::new(&profile).to_string());
        Ok(())
    }

    /// Apply each requested toggle in turn, then show the updated day and
    /// roadmap, or the updated document with `--json`.
    pub fn toggle(&mut self, args: &ToggleArgs) -> Result<()> {
        let mut last = None;
        for params in args.toggles() {
            let day = self.session.toggle_exercise(&params).with_context(|| {
                format!(
                    "Failed to toggle exercise {} of day {}",
                    params.exercise, params.day
                )
            })?;
            debug!("toggled {params:?}");
            last = Some((day, params.exercise_index()?));
        }

        if args.json {
            let profile = self.session.profile()?;
            println!("{}", document::to_document(&profile)?);
            return Ok(());
        }

        if let Some((day, exercise_index)) = last {
            self.renderer
                .render(&ToggleResult::new(&day, exercise_index).to_string());
            println!();
        }
        self.show_roadmap()
    }

    /// Animate the mole for the requested number of frames.
    pub async fn mole(&self, args: &MoleArgs) {
        let mut mole = Mole::new();
        if args.punch {
            mole.punch_bag();
        }

        let mut rng = rand::rng();
        let mut interval = tokio::time::interval(Duration::from_millis(args.interval_ms.max(1)));
        for _ in 0..args.ticks {
            interval.tick().await;
            self.renderer.render_frame(&mole.to_string());
            mole.tick(&mut rng);
        }
        self.renderer.finish_frames();
    }
}
