//! Gateway reading the user document from a local file.

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::UserGateway;
use crate::{
    document,
    error::{BurrowError, Result},
    models::UserProfile,
};

/// Reads a saved `/getuser` response from disk. Never writes.
pub struct FileUserGateway {
    path: PathBuf,
}

impl FileUserGateway {
    /// Create a gateway over the given document path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserGateway for FileUserGateway {
    fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| BurrowError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;
        let profile = document::parse_profile(&text)?;

        if let Some(owner) = profile.username.as_deref() {
            if owner != username {
                warn!(
                    "document {} belongs to '{owner}', requested '{username}'",
                    self.path.display()
                );
            }
        }
        info!("loaded profile from {}", self.path.display());
        Ok(profile)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_reads_document() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("user.json");
        std::fs::write(
            &path,
            r#"{"first-name": "Tom", "plan": {"days": [{"day-number": 1, "day-name": "Push", "workouts": []}]}}"#,
        )
        .expect("write fixture");

        let profile = FileUserGateway::new(&path).fetch_user("tomcat").expect("fetch");
        assert!(profile.has_plan());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let gateway = FileUserGateway::new(dir.path().join("absent.json"));
        assert!(matches!(
            gateway.fetch_user("tomcat"),
            Err(BurrowError::FileSystem { .. })
        ));
    }
}
