pub mod batch_source;
pub mod bridge_config;
pub mod bridge_handles;
pub mod bridge_status;
pub mod channel_batch_source;
pub mod channel_poll_source;
pub mod channel_producer;
pub mod command_producer;
pub mod command_relay;
pub mod error;
pub mod http_poll_source;
pub mod log_producer;
pub mod poll_source;
pub mod startup_mode;
pub mod upstream_bridge;

pub use batch_source::BatchSource;
pub use bridge_config::BridgeConfig;
pub use bridge_handles::BridgeHandles;
pub use bridge_status::BridgeStatus;
pub use channel_batch_source::ChannelBatchSource;
pub use channel_poll_source::ChannelPollSource;
pub use channel_producer::{ChannelProducer, ProducedMessage};
pub use command_producer::CommandProducer;
pub use command_relay::CommandRelay;
pub use error::{BridgeError, Result};
pub use http_poll_source::HttpPollSource;
pub use log_producer::LogProducer;
pub use poll_source::PollSource;
pub use startup_mode::StartupMode;
pub use upstream_bridge::UpstreamBridge;

#[cfg(test)]
mod tests;
