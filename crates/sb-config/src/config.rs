use crate::{
    ConfigError, ConfigErrorResult, LoggingConfig, RelayConfig, ServerConfig, UpstreamConfig,
    WebSocketConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub websocket: WebSocketConfig,
    pub relay: RelayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for SB_CONFIG_DIR env var, else use ./.sb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SB_CONFIG_DIR env var > ./.sb/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("SB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".sb"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.upstream.validate()?;
        self.websocket.validate()?;
        self.relay.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );

        info!(
            "  upstream: mode={}, startup={}, poll every {}ms",
            self.upstream.mode, self.upstream.startup_mode, self.upstream.poll_interval_ms
        );

        info!(
            "  relay: topic={} partition={}",
            self.relay.command_topic, self.relay.partition
        );

        info!("  websocket: buffer={}", self.websocket.send_buffer_size);

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "SB_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Upstream
        Self::apply_env_parse("SB_UPSTREAM_MODE", &mut self.upstream.mode);
        Self::apply_env_parse("SB_UPSTREAM_STARTUP_MODE", &mut self.upstream.startup_mode);
        Self::apply_env_parse(
            "SB_UPSTREAM_POLL_INTERVAL_MS",
            &mut self.upstream.poll_interval_ms,
        );
        Self::apply_env_option_string("SB_UPSTREAM_ENDPOINT", &mut self.upstream.endpoint);

        // Relay
        Self::apply_env_string("SB_RELAY_COMMAND_TOPIC", &mut self.relay.command_topic);
        Self::apply_env_parse("SB_RELAY_PARTITION", &mut self.relay.partition);

        // WebSocket
        Self::apply_env_parse(
            "SB_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );

        // Logging
        Self::apply_env_parse("SB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
