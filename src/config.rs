//! Runtime settings.
//!
//! Settings come from three layers, most specific first: command-line flags,
//! an optional YAML file, and the built-in defaults below. Every key in the
//! YAML file is optional.
//!
//! ```yaml
//! user_agent: "Mozilla/5.0 (X11; Linux x86_64)"
//! fetch_timeout_secs: 8
//! default_max_results: 40
//! ```

use crate::models::DEFAULT_MAX_RESULTS;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument, warn};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Settings shared by every request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `User-Agent` sent with every fetch.
    pub user_agent: String,
    /// Per-source fetch budget in seconds.
    pub fetch_timeout_secs: u64,
    /// Result cap used when a request does not carry a usable one.
    pub default_max_results: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Settings {
    /// Parse settings from YAML text, filling gaps with defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Settings>(text).map(Settings::sanitized)
    }

    /// Load settings from `path`, or the defaults when no path is given.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).await?;
        let settings = Self::from_yaml(&text)?;
        info!(?settings, "Loaded settings file");
        Ok(settings)
    }

    /// Apply command-line overrides on top of file/default values.
    pub fn with_overrides(mut self, fetch_timeout_secs: Option<u64>, user_agent: Option<String>) -> Self {
        if let Some(secs) = fetch_timeout_secs {
            self.fetch_timeout_secs = secs;
        }
        if let Some(ua) = user_agent {
            self.user_agent = ua;
        }
        self.sanitized()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    fn sanitized(mut self) -> Self {
        if self.fetch_timeout_secs == 0 {
            warn!(default = DEFAULT_FETCH_TIMEOUT_SECS, "fetch_timeout_secs must be positive; using default");
            self.fetch_timeout_secs = DEFAULT_FETCH_TIMEOUT_SECS;
        }
        if self.default_max_results == 0 {
            warn!(default = DEFAULT_MAX_RESULTS, "default_max_results must be positive; using default");
            self.default_max_results = DEFAULT_MAX_RESULTS;
        }
        if self.user_agent.trim().is_empty() {
            self.user_agent = DEFAULT_USER_AGENT.to_string();
        }
        self
    }
}
