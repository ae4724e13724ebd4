//! Gateway serving a fixed profile from memory.

use std::sync::Mutex;

use super::UserGateway;
use crate::{
    error::{BurrowError, Result},
    models::{Day, UserProfile},
};

/// Serves one profile and records every day pushed back to it.
///
/// With no profile configured every fetch fails, which is how the loading
/// state is exercised without a network.
#[derive(Default)]
pub struct InMemoryUserGateway {
    profile: Option<UserProfile>,
    pushed: Mutex<Vec<(usize, Day)>>,
}

impl InMemoryUserGateway {
    /// Gateway answering every fetch with `profile`.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            pushed: Mutex::new(Vec::new()),
        }
    }

    /// Gateway whose fetches always fail.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Days received through [`UserGateway::push_day`], oldest first.
    pub fn pushed_days(&self) -> Vec<(usize, Day)> {
        self.pushed
            .lock()
            .map(|pushed| pushed.clone())
            .unwrap_or_default()
    }
}

impl UserGateway for InMemoryUserGateway {
    fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        self.profile.clone().ok_or_else(|| BurrowError::FetchFailure {
            message: format!("no profile for {username}"),
            status: None,
            source: None,
        })
    }

    fn push_day(&self, _username: &str, day_index: usize, day: &Day) -> Result<()> {
        let mut pushed = self.pushed.lock().map_err(|_| BurrowError::Configuration {
            message: "write-back log poisoned".to_string(),
        })?;
        pushed.push((day_index, day.clone()));
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
