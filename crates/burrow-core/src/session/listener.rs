//! Callbacks notified after each toggle.

use std::sync::Arc;

use log::warn;

use crate::{
    gateway::UserGateway,
    models::{Day, UserProfile},
};

/// Receives the updated day after every successful toggle.
///
/// Listeners run synchronously, in registration order, after the new
/// snapshot is installed.
pub trait UpdateListener: Send + Sync {
    /// Called with the updated day and the snapshot that now contains it.
    fn day_updated(&self, username: &str, day_index: usize, day: &Day, snapshot: &UserProfile);
}

impl<F> UpdateListener for F
where
    F: Fn(usize, &Day) + Send + Sync,
{
    fn day_updated(&self, _username: &str, day_index: usize, day: &Day, _snapshot: &UserProfile) {
        self(day_index, day);
    }
}

/// Forwards every updated day to the gateway.
///
/// Write-back failures are logged and do not undo the local change.
pub struct WriteBack {
    gateway: Arc<dyn UserGateway>,
}

impl WriteBack {
    /// Forward updates to `gateway`.
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }
}

impl UpdateListener for WriteBack {
    fn day_updated(&self, username: &str, day_index: usize, day: &Day, _snapshot: &UserProfile) {
        if let Err(e) = self.gateway.push_day(username, day_index, day) {
            warn!(
                "write-back of day {} to {} failed: {e}",
                day.day_number,
                self.gateway.describe()
            );
        }
    }
}
