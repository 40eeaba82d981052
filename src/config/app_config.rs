use std::env;
use std::time::Duration;

use log::warn;
use url::Url;

use crate::errors::{PanelError, Result};

/// Default device base URL when none is configured
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fixed polling cadence in milliseconds
const DEFAULT_POLL_INTERVAL_MS: u64 = 1500;

/// Default per-request timeout
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Panel configuration
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Base URL of the remote device
    pub base_url: Url,

    /// Interval between polls
    pub poll_interval: Duration,

    /// Path of the state (read) endpoint, relative to the base URL
    pub state_path: String,

    /// Path of the control (write) endpoint, relative to the base URL
    pub control_path: String,

    /// Timeout applied to each request
    pub request_timeout: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is well-formed"),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            state_path: "/api/state".to_string(),
            control_path: "/api/control".to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl PanelConfig {
    /// Build a configuration from the environment, falling back to defaults
    /// for anything unset or malformed.
    ///
    /// Recognized variables: `RIGPANEL_URL` (device base URL) and
    /// `RIGPANEL_POLL_MS` (poll cadence in milliseconds).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var("RIGPANEL_URL") {
            match Url::parse(&value) {
                Ok(url) => config.base_url = url,
                Err(e) => warn!("Ignoring invalid RIGPANEL_URL {:?}: {}", value, e),
            }
        }

        if let Ok(value) = env::var("RIGPANEL_POLL_MS") {
            match value.parse::<u64>() {
                Ok(ms) if ms > 0 => config.poll_interval = Duration::from_millis(ms),
                _ => warn!("Ignoring invalid RIGPANEL_POLL_MS {:?}", value),
            }
        }

        config
    }

    /// Whether the panel talks to the device over https. Launcher URLs for
    /// the camera reuse this scheme.
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }

    /// Resolved URL of the state endpoint
    pub fn state_url(&self) -> Result<Url> {
        self.base_url
            .join(&self.state_path)
            .map_err(|e| PanelError::Config(format!("bad state path {:?}: {}", self.state_path, e)))
    }

    /// Resolved URL of the control endpoint
    pub fn control_url(&self) -> Result<Url> {
        self.base_url.join(&self.control_path).map_err(|e| {
            PanelError::Config(format!("bad control path {:?}: {}", self.control_path, e))
        })
    }
}
