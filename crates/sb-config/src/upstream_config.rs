use crate::{ConfigError, ConfigErrorResult, StartupMode, UpstreamMode};

use serde::Deserialize;

// Poll interval constraints (milliseconds)
pub const MIN_POLL_INTERVAL_MS: u64 = 100;
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;

/// Upstream ingestion settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub mode: UpstreamMode,
    pub startup_mode: StartupMode,
    /// Source A polling interval in milliseconds
    pub poll_interval_ms: u64,
    /// Source A pull endpoint (required in http mode)
    pub endpoint: Option<String>,
    /// Name of the environment variable holding the source A bearer
    /// token. The token itself never appears in config files.
    pub auth_token_env: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            mode: UpstreamMode::Simulated,
            startup_mode: StartupMode::Permissive,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            endpoint: None,
            auth_token_env: String::from("SB_UPSTREAM_TOKEN"),
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS
            || self.poll_interval_ms > MAX_POLL_INTERVAL_MS
        {
            return Err(ConfigError::upstream(format!(
                "upstream.poll_interval_ms must be {}-{}, got {}",
                MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, self.poll_interval_ms
            )));
        }

        if self.mode == UpstreamMode::Http
            && self.endpoint.as_deref().unwrap_or("").trim().is_empty()
        {
            return Err(ConfigError::upstream(
                "upstream.endpoint is required when upstream.mode = \"http\"",
            ));
        }

        Ok(())
    }
}
