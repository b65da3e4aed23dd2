use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sb_config::ConfigError),

    #[error("Upstream bridge error: {0}")]
    Bridge(#[from] sb_bridge::BridgeError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
