//! Sources of user documents.
//!
//! The core never talks to the network directly; a [`Session`](crate::Session)
//! is handed a [`UserGateway`] and calls it from a blocking task. Three
//! implementations are provided:
//!
//! - [`HttpUserGateway`]: `GET {base}/getuser?username=...` on the coaching
//!   backend
//! - [`FileUserGateway`]: the same document read from a local JSON file
//! - [`InMemoryUserGateway`]: a fixed profile, for tests and demos

use log::debug;

use crate::{error::Result, models::Day, models::UserProfile};

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileUserGateway;
pub use http::HttpUserGateway;
pub use memory::InMemoryUserGateway;

/// A blocking source of user documents.
pub trait UserGateway: Send + Sync {
    /// Fetch the profile (and embedded plan) of `username`.
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::FetchFailure` when the source cannot be reached
    /// or answers with a non-2xx status, and `BurrowError::SchemaMismatch`
    /// when the document is malformed.
    fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    /// Called after every local toggle with the updated day.
    ///
    /// The backend exposes no write endpoint, so the default keeps the change
    /// local.
    ///
    /// # Errors
    ///
    /// Implementations that persist may return any gateway error.
    fn push_day(&self, username: &str, day_index: usize, day: &Day) -> Result<()> {
        debug!(
            "no write-back for {username}: day {} (index {day_index}) stays local",
            day.day_number
        );
        Ok(())
    }

    /// Short description used in log lines.
    fn describe(&self) -> String;
}
