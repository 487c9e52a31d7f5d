use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings for the outbound image lookup service, overridable from the
/// environment (`WIKI_BASE_URL`, `WIKI_TIMEOUT_SECS`).
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl EnrichConfig {
    pub fn from_env() -> Self {
        let base_url =
            env::var("WIKI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("WIKI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
