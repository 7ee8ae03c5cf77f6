//! Process configuration
//!
//! Built once at startup from the environment (after `.env` is loaded) and
//! shared read-only with the rest of the service.

use std::time::Duration;

use crate::api::TiingoClient;
use tracing::warn;

/// Service configuration - all values can be overridden via environment variables
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Tiingo API key. Absence is reported per request, not at startup.
    pub api_key: Option<String>,
    /// Tiingo REST base URL
    pub tiingo_base_url: String,
    /// Server bind host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Bound on each outbound call to Tiingo
    pub upstream_timeout: Duration,
    /// Bound on handling one inbound request, slow clients included
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            tiingo_base_url: TiingoClient::DEFAULT_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            upstream_timeout: Duration::from_secs(6),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // An empty key counts as missing
        config.api_key = lookup("TIINGO_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(url) = lookup("TIINGO_BASE_URL") {
            config.tiingo_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(host) = lookup("SERVER_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => warn!("Ignoring invalid SERVER_PORT '{}', using {}", port, config.port),
            }
        }
        if let Some(secs) = lookup("UPSTREAM_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) if s > 0 => config.upstream_timeout = Duration::from_secs(s),
                _ => warn!(
                    "Ignoring invalid UPSTREAM_TIMEOUT_SECS '{}', using {}s",
                    secs,
                    config.upstream_timeout.as_secs()
                ),
            }
        }

        if let Some(secs) = lookup("SERVER_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) if s > 0 => config.request_timeout = Duration::from_secs(s),
                _ => warn!(
                    "Ignoring invalid SERVER_TIMEOUT_SECS '{}', using {}s",
                    secs,
                    config.request_timeout.as_secs()
                ),
            }
        }
        // Upstream failures must surface as 504 before the server gives up on the request
        if config.request_timeout <= config.upstream_timeout {
            let raised = config.upstream_timeout + Duration::from_secs(1);
            warn!(
                "SERVER_TIMEOUT_SECS must exceed UPSTREAM_TIMEOUT_SECS, using {}s",
                raised.as_secs()
            );
            config.request_timeout = raised;
        }

        config
    }

    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
