//! Blocking HTTP gateway for the coaching backend.

use log::{debug, info};
use ureq::Agent;

use super::UserGateway;
use crate::{
    document,
    error::{BurrowError, Result},
    models::UserProfile,
};

/// Backend the mobile mockup talks to.
pub const DEFAULT_BASE_URL: &str = "http://fitlingo.duckdns.org:5000";

/// Fetches user documents from `GET {base_url}/getuser?username=...`.
///
/// One request per call; no retries, no caching.
pub struct HttpUserGateway {
    agent: Agent,
    base_url: String,
}

impl HttpUserGateway {
    /// Create a gateway for the given base URL. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url,
        }
    }

    /// The endpoint queried for users.
    pub fn endpoint(&self) -> String {
        format!("{}/getuser", self.base_url)
    }
}

impl Default for HttpUserGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UserGateway for HttpUserGateway {
    fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        if username.trim().is_empty() {
            return Err(BurrowError::invalid_input("username").with_reason("must not be empty"));
        }

        let endpoint = self.endpoint();
        debug!("GET {endpoint}?username={username}");

        let response = self
            .agent
            .get(&endpoint)
            .query("username", username)
            .call()
            .map_err(|e| BurrowError::fetch(format!("GET {endpoint}")).with_source(e))?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(BurrowError::fetch(format!("GET {endpoint}")).with_status(status));
        }

        let body = response.into_string().map_err(|e| BurrowError::FetchFailure {
            message: format!("reading response from {endpoint}: {e}"),
            status: Some(status),
            source: None,
        })?;

        let profile = document::parse_profile(&body)?;
        info!("fetched profile for {username} from {}", self.base_url);
        Ok(profile)
    }

    fn describe(&self) -> String {
        self.endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let gateway = HttpUserGateway::new("http://localhost:5000/");
        assert_eq!(gateway.endpoint(), "http://localhost:5000/getuser");
    }

    #[test]
    fn test_default_points_at_backend() {
        assert_eq!(
            HttpUserGateway::default().describe(),
            "http://fitlingo.duckdns.org:5000/getuser"
        );
    }

    #[test]
    fn test_empty_username_rejected_before_request() {
        let gateway = HttpUserGateway::new("http://127.0.0.1:9");
        assert!(matches!(
            gateway.fetch_user("  "),
            Err(BurrowError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_unreachable_backend_is_fetch_failure() {
        // Port 9 (discard) is not listening on loopback in test environments.
        let gateway = HttpUserGateway::new("http://127.0.0.1:9");
        let err = gateway.fetch_user("tomcat").unwrap_err();
        assert!(err.is_fetch_failure(), "unexpected error: {err}");
    }
}
