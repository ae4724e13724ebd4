//! In-memory holder of the current profile snapshot.

use std::sync::Arc;

use log::debug;

use crate::{
    error::{BurrowError, Result},
    models::{Plan, UserProfile},
};

/// Holds the authoritative [`UserProfile`] snapshot for one session.
///
/// Snapshots are shared through [`Arc`] and never mutated; [`PlanStore::replace`]
/// swaps in a new one. Readers that cloned the previous `Arc` keep a
/// consistent view.
#[derive(Debug, Default)]
pub struct PlanStore {
    current: Option<Arc<UserProfile>>,
    revision: u64,
}

impl PlanStore {
    /// Creates an empty store. Nothing is loaded until the first
    /// [`replace`](Self::replace).
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if a profile has been loaded.
    pub fn current(&self) -> Option<Arc<UserProfile>> {
        self.current.clone()
    }

    /// Installs the next snapshot.
    pub fn replace(&mut self, next: UserProfile) {
        self.revision += 1;
        debug!(
            "store revision {} for '{}' (plan loaded: {})",
            self.revision,
            next.first_name,
            next.has_plan()
        );
        self.current = Some(Arc::new(next));
    }

    /// Drops the snapshot at the end of a session.
    pub fn discard(&mut self) {
        self.current = None;
    }

    /// Whether a profile with a non-empty plan is present. Anything else is
    /// the "not loaded" state shown as a loading placeholder.
    pub fn is_loaded(&self) -> bool {
        self.current.as_deref().is_some_and(UserProfile::has_plan)
    }

    /// The loaded plan.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::NotLoaded` unless [`is_loaded`](Self::is_loaded).
    pub fn plan(&self) -> Result<&Plan> {
        self.current
            .as_deref()
            .and_then(|profile| profile.plan.as_ref())
            .filter(|plan| !plan.is_empty())
            .ok_or(BurrowError::NotLoaded)
    }

    /// Number of snapshots installed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Exercise};

    fn profile(with_plan: bool) -> UserProfile {
        UserProfile {
            first_name: "Tom".to_string(),
            username: Some("tomcat".to_string()),
            days: 1,
            intensity: "Low".to_string(),
            plan: with_plan.then(|| {
                Plan::new(vec![Day {
                    day_number: 1,
                    day_name: "Push".to_string(),
                    estimated_workout_time: String::new(),
                    suggested_calorie_intake: String::new(),
                    date_completed: None,
                    exercises: vec![Exercise::new("Dip", 3, 8)],
                }])
            }),
        }
    }

    #[test]
    fn test_new_store_is_not_loaded() {
        let store = PlanStore::new();
        assert!(store.current().is_none());
        assert!(!store.is_loaded());
        assert!(matches!(store.plan(), Err(BurrowError::NotLoaded)));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_profile_without_plan_is_not_loaded() {
        let mut store = PlanStore::new();
        store.replace(profile(false));
        assert!(store.current().is_some());
        assert!(!store.is_loaded());
        assert!(store.plan().is_err());
    }

    #[test]
    fn test_replace_keeps_old_snapshot_intact() {
        let mut store = PlanStore::new();
        store.replace(profile(true));
        let before = store.current().expect("snapshot");

        let mut next = (*before).clone();
        next.first_name = "Thomas".to_string();
        store.replace(next);

        assert_eq!(before.first_name, "Tom");
        assert_eq!(store.current().unwrap().first_name, "Thomas");
        assert_eq!(store.revision(), 2);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_discard() {
        let mut store = PlanStore::new();
        store.replace(profile(true));
        store.discard();
        assert!(!store.is_loaded());
        assert!(store.current().is_none());
    }
}
