//! Placeholder shown while no plan is available.

use std::fmt;

/// Text shown in place of the roadmap until a plan is loaded.
pub const LOADING_MESSAGE: &str = "Loading excavation plan...";

/// The not-loaded view. A failed fetch leaves the view in this state; the
/// error, when known, is shown beneath the placeholder.
#[derive(Debug, Default)]
pub struct LoadingPlaceholder<'a> {
    error: Option<&'a str>,
}

impl<'a> LoadingPlaceholder<'a> {
    /// Placeholder without an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder noting the last failed fetch.
    pub fn with_error(error: Option<&'a str>) -> Self {
        Self { error }
    }
}

impl fmt::Display for LoadingPlaceholder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{LOADING_MESSAGE}")?;
        if let Some(error) = self.error {
            writeln!(f)?;
            writeln!(f, "Last attempt failed: {error}")?;
        }
        Ok(())
    }
}
