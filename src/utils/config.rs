//! Client configuration
//!
//! Settings come from, in increasing precedence: built-in defaults, an
//! optional TOML file, a `.env` file, the `NEXT_PUBLIC_API_URL` environment
//! variable and finally the command line.
//!
//! ```toml
//! api_url = "https://campus.example.edu/api"
//! guard_policy = "unexpired"
//! send_history = true
//! history_limit = 10
//! ```

use crate::auth::GuardPolicy;
use crate::views::HistoryPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// File read when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "campus-chat.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the campus API
    pub api_url: String,

    /// What the guard requires before showing protected views
    pub guard_policy: GuardPolicy,

    /// Whether prior turns are sent along with each chat message
    pub send_history: bool,

    /// Maximum number of prior turns to send
    pub history_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            guard_policy: GuardPolicy::default(),
            send_history: true,
            history_limit: 20,
        }
    }
}

impl ClientConfig {
    /// API base URL with any trailing `/` removed.
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        HistoryPolicy {
            enabled: self.send_history,
            limit: self.history_limit,
        }
    }

    /// Replace the API URL when `url` is set and non-blank.
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        self
    }
}

#[cfg(feature = "native")]
mod loader {
    use super::*;
    use crate::types::{ClientError, Result};
    use std::fs;
    use std::path::Path;
    use tracing::debug;

    impl ClientConfig {
        /// Parse a TOML document; absent keys keep their defaults.
        pub fn from_toml(content: &str) -> Result<Self> {
            toml::from_str(content)
                .map_err(|e| ClientError::Config(format!("Failed to parse TOML: {}", e)))
        }

        /// Read a TOML file.
        pub fn from_file(path: &Path) -> Result<Self> {
            let content = fs::read_to_string(path).map_err(|e| {
                ClientError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            Self::from_toml(&content)
        }

        /// Build the effective configuration for the terminal client.
        ///
        /// An explicit `path` must exist. Without one, `campus-chat.toml` in
        /// the working directory is used if present.
        pub fn load(path: Option<&Path>) -> Result<Self> {
            let config = match path {
                Some(path) => Self::from_file(path)?,
                None => {
                    let default = Path::new(DEFAULT_CONFIG_FILE);
                    if default.exists() {
                        Self::from_file(default)?
                    } else {
                        Self::default()
                    }
                }
            };

            if let Ok(env_file) = dotenvy::dotenv() {
                debug!(path = %env_file.display(), "Loaded .env");
            }

            let config = config.with_api_url_override(std::env::var(API_URL_ENV).ok());
            debug!(api_url = %config.api_url(), policy = ?config.guard_policy, "Configuration loaded");
            Ok(config)
        }
    }
}
