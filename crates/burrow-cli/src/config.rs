//! Optional JSON config file.
//!
//! Values from the command line win over the file, and the file wins over
//! the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

/// Contents of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Base URL of the coaching backend
    pub base_url: Option<String>,
    /// Account to fetch
    pub username: Option<String>,
    /// Forward toggled days to the gateway
    #[serde(default)]
    pub write_back: bool,
}

impl Config {
    /// Load the config from `path`, or from the XDG config directory when no
    /// path is given. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) => Self::read(&path),
                None => Ok(Self::default()),
            },
        }
    }

    fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("burrow").find_config_file("config.json")
    }

    fn read(path: &Path) -> Result<Self> {
        debug!("reading config from {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
