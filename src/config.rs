//! # Print Service Configuration
//!
//! Where the print service listens and how requests to it are made.
//!
//! | Setting | Default | Environment |
//! |---------|---------|-------------|
//! | Base URL | `http://localhost:8000` | `THERMAL_RELAY_URL` |
//! | Timeout | none | `THERMAL_RELAY_TIMEOUT_SECS` |
//!
//! ```
//! use thermal_relay::ServiceConfig;
//!
//! let config = ServiceConfig::new("http://192.168.1.20:8000").unwrap();
//! assert_eq!(config.endpoint("print").unwrap().as_str(), "http://192.168.1.20:8000/print");
//! ```

use reqwest::Url;
use std::time::Duration;

use crate::error::{RelayError, Result};

/// Base URL of the local print service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL.
pub const URL_ENV: &str = "THERMAL_RELAY_URL";

/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "THERMAL_RELAY_TIMEOUT_SECS";

/// Connection settings for the print service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL; endpoint paths are resolved against it.
    pub base_url: Url,
    /// Per-request timeout. `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_SERVICE_URL).expect("default service URL is valid"),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("thermal-relay/{}", env!("CARGO_PKG_VERSION"))
}

impl ServiceConfig {
    /// Configuration for a service at `base_url`.
    ///
    /// Only `http` and `https` URLs are accepted. A base path such as
    /// `http://host/spool` is kept, so endpoints resolve to `/spool/print`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::default().with_base_url(base_url)
    }

    /// Point at a different service, keeping the timeout and user agent.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| RelayError::Config(format!("invalid service URL '{}': {}", base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::Config(format!(
                "unsupported scheme '{}' in service URL",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        self.base_url = url;
        Ok(self)
    }

    /// Configuration from `THERMAL_RELAY_URL` and `THERMAL_RELAY_TIMEOUT_SECS`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(URL_ENV) {
            Some(url) => Self::new(url.trim())?,
            None => Self::default(),
        };

        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| RelayError::Config(format!("{} must be whole seconds, got '{}'", TIMEOUT_ENV, secs)))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve an endpoint path (e.g. `"print"`) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| RelayError::Config(format!("invalid endpoint '{}': {}", path, e)))
    }
}
