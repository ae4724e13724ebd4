//! Error types for the burrow core library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all burrow operations.
#[derive(Error, Debug)]
pub enum BurrowError {
    /// Network or HTTP failure while talking to the user gateway
    #[error("Fetch failed: {message}")]
    FetchFailure {
        message: String,
        /// HTTP status when the server answered with a non-2xx code
        status: Option<u16>,
        #[source]
        source: Option<Box<ureq::Error>>,
    },
    /// The external document did not match the expected shape
    #[error("Schema mismatch at '{path}': {reason}")]
    SchemaMismatch { path: String, reason: String },
    /// An exercise index outside the day's exercise sequence
    #[error("Exercise index {index} out of range for a day with {len} exercises")]
    IndexOutOfRange { index: usize, len: usize },
    /// A day index outside the plan
    #[error("Day {day} not found in a plan of {len} days")]
    DayNotFound { day: usize, len: usize },
    /// The requested day is still locked on the roadmap
    #[error("Day {day} is locked until the previous day is completed")]
    DayLocked { day: usize },
    /// No profile with a plan has been loaded into the session yet
    #[error("No workout plan loaded")]
    NotLoaded,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating fetch errors with optional context.
pub struct FetchErrorBuilder {
    message: String,
}

impl FetchErrorBuilder {
    /// Create a new fetch error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error from a ureq failure, keeping the HTTP status if any.
    pub fn with_source(self, source: ureq::Error) -> BurrowError {
        let status = match &source {
            ureq::Error::Status(code, _) => Some(*code),
            ureq::Error::Transport(_) => None,
        };
        BurrowError::FetchFailure {
            message: self.message,
            status,
            source: Some(Box::new(source)),
        }
    }

    /// Build the error for a non-2xx response without an underlying error.
    pub fn with_status(self, status: u16) -> BurrowError {
        BurrowError::FetchFailure {
            message: format!("{}: HTTP error! status: {status}", self.message),
            status: Some(status),
            source: None,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BurrowError {
        BurrowError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BurrowError {
    /// Creates a builder for fetch errors.
    pub fn fetch(message: impl Into<String>) -> FetchErrorBuilder {
        FetchErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a schema mismatch error for the given field path.
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from the gateway rather than from local state.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }
}

/// Extension trait for join results from `spawn_blocking`.
pub trait JoinResultExt<T> {
    /// Map a task join failure into a configuration error.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<Result<T>, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| BurrowError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Result type alias for burrow operations
pub type Result<T> = std::result::Result<T, BurrowError>;
