mod config;
mod error;
mod log_level;
mod logging_config;
mod relay_config;
mod server_config;
mod startup_mode;
mod upstream_config;
mod upstream_mode;
mod websocket_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use relay_config::RelayConfig;
pub use server_config::ServerConfig;
pub use startup_mode::StartupMode;
pub use upstream_config::UpstreamConfig;
pub use upstream_mode::UpstreamMode;
pub use websocket_config::WebSocketConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
