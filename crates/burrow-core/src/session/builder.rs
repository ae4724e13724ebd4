//! Builder for creating and configuring Session instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::{Session, WriteBack};
use crate::{
    error::{BurrowError, Result},
    gateway::{http::DEFAULT_BASE_URL, FileUserGateway, HttpUserGateway, UserGateway},
};

/// Account fetched when none is configured.
pub const DEFAULT_USERNAME: &str = "tomcat";

/// Builder for creating and configuring Session instances.
#[derive(Clone, Default)]
pub struct SessionBuilder {
    username: Option<String>,
    base_url: Option<String>,
    document_path: Option<PathBuf>,
    gateway: Option<Arc<dyn UserGateway>>,
    write_back: bool,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account to fetch. Defaults to [`DEFAULT_USERNAME`].
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the backend base URL. Defaults to [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Reads the user document from a local file instead of the backend.
    pub fn with_document_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.document_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given gateway, overriding base URL and document path.
    pub fn with_gateway(mut self, gateway: Arc<dyn UserGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Forwards every toggled day to the gateway's `push_day`.
    pub fn with_write_back(mut self, enabled: bool) -> Self {
        self.write_back = enabled;
        self
    }

    /// Builds the configured session. Nothing is fetched until
    /// [`Session::load`].
    ///
    /// # Errors
    ///
    /// Returns `BurrowError::InvalidInput` if the username is empty.
    pub fn build(self) -> Result<Session> {
        let username = self
            .username
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(BurrowError::invalid_input("username").with_reason("must not be empty"));
        }

        let gateway: Arc<dyn UserGateway> = match (self.gateway, self.document_path) {
            (Some(gateway), _) => gateway,
            (None, Some(path)) => Arc::new(FileUserGateway::new(path)),
            (None, None) => Arc::new(HttpUserGateway::new(
                self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            )),
        };
        debug!("session for {username} reads from {}", gateway.describe());

        let mut session = Session::new(Arc::clone(&gateway), username);
        if self.write_back {
            session.add_listener(WriteBack::new(gateway));
        }
        Ok(session)
    }
}
