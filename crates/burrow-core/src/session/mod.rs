//! Session coordinating the gateway, the store and the reducer.
//!
//! ```text
//! ┌─────────────┐  load   ┌─────────────┐  read   ┌──────────────────┐
//! │ UserGateway │───────▶│  PlanStore  │───────▶│ roadmap / stats  │
//! └─────────────┘         └─────────────┘         └──────────────────┘
//!                               ▲                          │
//!                               │ replace          toggle  ▼
//!                         ┌─────────────┐         ┌──────────────────┐
//!                         │ splice_day  │◀────────│     reducer      │
//!                         └─────────────┘         └──────────────────┘
//! ```
//!
//! A session owns one [`PlanStore`]. The only asynchronous step is
//! [`Session::load`], which runs the blocking gateway call on tokio's
//! blocking pool. Everything else is synchronous and operates on the current
//! snapshot; each successful toggle replaces the snapshot exactly once and
//! then notifies the registered [`UpdateListener`]s.
//!
//! # Examples
//!
//! ```rust
//! use burrow_core::{SessionBuilder, params::{DayRef, ToggleExercise}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_username("tomcat")
//!     .with_document_path(Some("tomcat.json"))
//!     .build()?;
//!
//! session.load().await?;
//! let day = session.toggle_exercise(&ToggleExercise { day: 1, exercise: 1 })?;
//! println!("{}", day.day_name);
//! println!("{:?}", session.progress(&DayRef { day: 1 })?);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{info, warn};
use tokio::task;

use crate::{
    error::{BurrowError, JoinResultExt, Result},
    gateway::UserGateway,
    models::{Day, Plan, UserProfile},
    params::{DayRef, ToggleExercise},
    reducer,
    roadmap::{self, NodeState, RoadmapNode},
    stats::{self, DayProgress, Stats},
    store::PlanStore,
};

pub mod builder;
pub mod listener;

#[cfg(test)]
mod tests;

pub use builder::{SessionBuilder, DEFAULT_USERNAME};
pub use listener::{UpdateListener, WriteBack};

/// One user's in-memory coaching session.
pub struct Session {
    pub(crate) gateway: Arc<dyn UserGateway>,
    pub(crate) username: String,
    pub(crate) store: PlanStore,
    pub(crate) last_error: Option<String>,
    pub(crate) listeners: Vec<Box<dyn UpdateListener>>,
}

impl Session {
    pub(crate) fn new(gateway: Arc<dyn UserGateway>, username: String) -> Self {
        Self {
            gateway,
            username,
            store: PlanStore::new(),
            last_error: None,
            listeners: Vec::new(),
        }
    }

    /// Account this session fetches.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Description of the document source.
    pub fn source(&self) -> String {
        self.gateway.describe()
    }

    /// Register a callback run after every successful toggle.
    pub fn add_listener(&mut self, listener: impl UpdateListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Fetch the user document and install it as the current snapshot.
    ///
    /// On failure the previous snapshot (none, on a fresh session) stays in
    /// place and the message is kept for [`last_error`](Self::last_error).
    /// There is no retry.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error, typically `BurrowError::FetchFailure` or
    /// `BurrowError::SchemaMismatch`.
    pub async fn load(&mut self) -> Result<Arc<UserProfile>> {
        let gateway = Arc::clone(&self.gateway);
        let username = self.username.clone();

        let fetched = task::spawn_blocking(move || gateway.fetch_user(&username))
            .await
            .join_context();

        match fetched {
            Ok(profile) => {
                info!(
                    "loaded plan for {} ({} days)",
                    self.username,
                    profile.plan.as_ref().map_or(0, Plan::len)
                );
                self.last_error = None;
                self.store.replace(profile);
                self.store.current().ok_or(BurrowError::NotLoaded)
            }
            Err(e) => {
                warn!("loading {} from {} failed: {e}", self.username, self.source());
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Install a profile obtained elsewhere, bypassing the gateway.
    pub fn replace(&mut self, profile: UserProfile) {
        self.last_error = None;
        self.store.replace(profile);
    }

    /// End the session, dropping the snapshot.
    pub fn discard(&mut self) {
        self.store.discard();
        self.last_error = None;
    }

    /// Whether a plan is available for rendering.
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Message of the last failed load, if the latest load failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of snapshots installed so far.
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// The current profile snapshot.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::NotLoaded` before the first successful load.
    pub fn profile(&self) -> Result<Arc<UserProfile>> {
        self.store.current().ok_or(BurrowError::NotLoaded)
    }

    /// The loaded plan.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::NotLoaded` if no plan is available.
    pub fn plan(&self) -> Result<&Plan> {
        self.store.plan()
    }

    /// Roadmap nodes of the loaded plan.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::NotLoaded` if no plan is available.
    pub fn roadmap(&self) -> Result<Vec<RoadmapNode<'_>>> {
        Ok(roadmap::derive_nodes(self.plan()?))
    }

    /// A single day of the loaded plan.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::NotLoaded` if no plan is available,
    /// `BurrowError::InvalidInput` for day 0 and `BurrowError::DayNotFound`
    /// past the end of the plan.
    pub fn day(&self, params: &DayRef) -> Result<&Day> {
        let plan = self.plan()?;
        let index = params.day_index()?;
        plan.day(index).ok_or(BurrowError::DayNotFound {
            day: params.day as usize,
            len: plan.len(),
        })
    }

    /// Roadmap state of a single day.
    ///
    /// # Errors
    ///
    /// See [`day`](Self::day).
    pub fn day_state(&self, params: &DayRef) -> Result<NodeState> {
        let plan = self.plan()?;
        let day = self.day(params)?;
        let previous = params.day_index()?.checked_sub(1).and_then(|p| plan.day(p));
        Ok(roadmap::node_state(day, previous))
    }

    /// Summary counters. A profile without a plan reports empty stats.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::NotLoaded` before the first successful load.
    pub fn stats(&self) -> Result<Stats> {
        Ok(stats::aggregate_profile(&*self.profile()?))
    }

    /// Exercise progress of a single day.
    ///
    /// # Errors
    ///
    /// See [`day`](Self::day).
    pub fn progress(&self, params: &DayRef) -> Result<DayProgress> {
        Ok(DayProgress::of(self.day(params)?))
    }

    /// Tick an exercise on or off and install the resulting snapshot.
    ///
    /// Locked days are refused. On success the new day is returned after the
    /// store has been updated and every listener has been notified.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::DayLocked` for a locked day,
    /// `BurrowError::IndexOutOfRange` for an exercise past the end of the
    /// day, and the errors of [`day`](Self::day).
    pub fn toggle_exercise(&mut self, params: &ToggleExercise) -> Result<Day> {
        let day_ref = params.day_ref();
        let day_index = day_ref.day_index()?;

        if self.day_state(&day_ref)? == NodeState::Locked {
            return Err(BurrowError::DayLocked {
                day: params.day as usize,
            });
        }

        let exercise_index = params.exercise_index()?;
        let updated = reducer::toggle(self.day(&day_ref)?, exercise_index)?;

        let snapshot = self.profile()?;
        let next = reducer::splice_day(&snapshot, day_index, updated.clone())?;
        self.store.replace(next);

        let snapshot = self.profile()?;
        for listener in &self.listeners {
            listener.day_updated(&self.username, day_index, &updated, &snapshot);
        }

        Ok(updated)
    }
}
