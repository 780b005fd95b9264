use log::*;
use spg_common::Secret;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Hostname of the aggregator API, e.g. `api.aggregator.example`.
    pub host: String,
    pub api_key: Secret<String>,
    pub api_version: String,
    /// Hard deadline on every outbound request, in seconds.
    pub timeout_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            host: "api.aggregator.example".to_string(),
            api_key: Secret::default(),
            api_version: "v1".to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AggregatorConfig {
    pub fn new_from_env_or_default() -> Self {
        let host = std::env::var("SPG_AGGREGATOR_HOST").unwrap_or_else(|_| {
            warn!("SPG_AGGREGATOR_HOST not set, using (probably useless) default");
            "api.aggregator.example".to_string()
        });
        let api_version = std::env::var("SPG_AGGREGATOR_API_VERSION").unwrap_or_else(|_| {
            warn!("SPG_AGGREGATOR_API_VERSION not set, using v1 as default");
            "v1".to_string()
        });
        let api_key = Secret::new(std::env::var("SPG_AGGREGATOR_API_KEY").unwrap_or_else(|_| {
            warn!("SPG_AGGREGATOR_API_KEY not set. The server will refuse to start without it.");
            String::default()
        }));
        let timeout_secs = std::env::var("SPG_AGGREGATOR_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Self { host, api_key, api_version, timeout_secs }
    }
}
