use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ExtraSettings;

/// Default user agent for subscription downloads
pub const DEFAULT_USER_AGENT: &str = "surge2clash";
/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;
/// Default file name inside the gist
pub const DEFAULT_GIST_FILENAME: &str = "subscribe.yaml";
/// Default GitHub API endpoint
pub const DEFAULT_GIST_API_BASE: &str = "https://api.github.com";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings structure to hold the whole configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub convert: ExtraSettings,
    pub http: HttpSettings,
    pub gist: GistSettings,
}

/// Options for the subscription download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Proxy used for every request, e.g. `http://127.0.0.1:8080`
    pub proxy: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        HttpSettings {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT,
            proxy: None,
        }
    }
}

/// Where the generated document is uploaded
///
/// The access token is not part of the settings; it is only read from the
/// `GITHUB_TOKEN` environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistSettings {
    pub id: Option<String>,
    pub filename: String,
    pub api_base: String,
}

impl Default for GistSettings {
    fn default() -> Self {
        GistSettings {
            id: None,
            filename: DEFAULT_GIST_FILENAME.to_string(),
            api_base: DEFAULT_GIST_API_BASE.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML content
    pub fn from_content(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path.as_ref())?;
        debug!("Loaded settings from {}", path.as_ref().display());
        Self::from_content(&content)
    }

    /// Override gist settings from `GIST_ID` and `FILE_NAME`
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Override gist settings using `lookup` to read variables
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let id = lookup("GIST_ID");
        let filename = lookup("FILE_NAME");
        self.override_gist(id.as_deref(), filename.as_deref());
    }

    /// Override the gist target; empty values are treated as unset
    ///
    /// Environment variables and command line flags both go through here,
    /// the flags being applied last.
    pub fn override_gist(&mut self, id: Option<&str>, filename: Option<&str>) {
        if let Some(id) = id.map(str::trim).filter(|v| !v.is_empty()) {
            self.gist.id = Some(id.to_string());
        }
        if let Some(filename) = filename.map(str::trim).filter(|v| !v.is_empty()) {
            self.gist.filename = filename.to_string();
        }
    }
}
