//! Client configuration: base URL, timeout and user agent.

use std::time::Duration;

use crate::user_agent::get_user_agent;

/// Canonical root of the UUP Dump API.
pub const DEFAULT_BASE_URL: &str = "https://api.uupdump.net";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "UUPDUMP_BASE_URL";

/// Environment variable overriding [`ClientConfig::timeout`], in seconds.
pub const TIMEOUT_ENV: &str = "UUPDUMP_TIMEOUT";

/// Settings fixed for the lifetime of a [`Client`](crate::Client).
///
/// There is no log level or log format here. The client only emits `tracing`
/// events; verbosity and format belong to whichever subscriber the application
/// installs, either its own or [`configure_logging`](crate::configure_logging).
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined to.
    pub base_url: String,
    /// Default timeout for a whole request, overridable per call.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: get_user_agent().to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by `UUPDUMP_BASE_URL` and `UUPDUMP_TIMEOUT` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(secs) => config.timeout = timeout_from_secs(secs),
                Err(e) => {
                    tracing::warn!("Ignoring {}={:?}: {}", TIMEOUT_ENV, raw, e);
                }
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout in seconds. Zero is kept as is; negative or
    /// non-finite values become a zero timeout.
    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout = timeout_from_secs(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

pub(crate) fn timeout_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.uupdump.net");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("uupdump-api-rs/"));
    }

    #[test]
    fn timeout_secs_is_permissive() {
        assert_eq!(
            ClientConfig::new().with_timeout_secs(2.5).timeout,
            Duration::from_millis(2500)
        );
        assert_eq!(ClientConfig::new().with_timeout_secs(0.0).timeout, Duration::ZERO);
        assert_eq!(ClientConfig::new().with_timeout_secs(-5.0).timeout, Duration::ZERO);
        assert_eq!(
            ClientConfig::new().with_timeout_secs(f64::NAN).timeout,
            Duration::ZERO
        );
    }

    #[test]
    fn env_overrides() {
        let env = HashMap::from([
            (BASE_URL_ENV, "http://localhost:8080 "),
            (TIMEOUT_ENV, "3"),
        ]);
        let config = ClientConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn unparsable_env_timeout_is_ignored() {
        let env = HashMap::from([(TIMEOUT_ENV, "soon"), (BASE_URL_ENV, "  ")]);
        let config = ClientConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
