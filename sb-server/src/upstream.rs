use sb_bridge::{
    BridgeConfig, ChannelBatchSource, ChannelPollSource, HttpPollSource, LogProducer,
    UpstreamBridge,
};
use sb_config::UpstreamMode;
use sb_core::{Record, SourceKind};

use std::time::Duration;

use bytes::Bytes;
use tokio::sync::mpsc;

/// Senders feeding the channel-backed sources; present in simulated
/// mode only, where the development feed drives them.
pub struct FeedInputs {
    pub records: mpsc::UnboundedSender<Record>,
    pub batches: mpsc::UnboundedSender<Vec<Bytes>>,
}

/// The assembled-but-uninitialized upstream side of the pipeline.
pub struct Upstream {
    pub bridge: UpstreamBridge,
    pub records: mpsc::UnboundedReceiver<(SourceKind, Record)>,
    pub feed: Option<FeedInputs>,
}

/// Assemble the bridge seams for the configured upstream mode.
///
/// - `disabled`: channel sources with no feeder, so the poll source
///   idles and the batch subscription ends immediately.
/// - `simulated`: channel sources driven by the development feed.
/// - `http`: the poll source pulls the configured endpoint; the batch
///   source stays channel-backed with no remote transport.
pub fn build(config: &sb_config::Config) -> Upstream {
    let bridge_config = BridgeConfig {
        startup_mode: startup_mode(config.upstream.startup_mode),
        poll_interval: Duration::from_millis(config.upstream.poll_interval_ms),
    };

    match config.upstream.mode {
        UpstreamMode::Http => {
            let endpoint = config.upstream.endpoint.clone().unwrap_or_default();
            let poll_source = HttpPollSource::from_env(endpoint, &config.upstream.auth_token_env);
            let (_batch_sender, batch_source) = ChannelBatchSource::new();

            let (bridge, records) = UpstreamBridge::new(
                Box::new(poll_source),
                Box::new(batch_source),
                Box::new(LogProducer),
                bridge_config,
            );

            Upstream {
                bridge,
                records,
                feed: None,
            }
        },
        UpstreamMode::Simulated => {
            let (record_sender, poll_source) = ChannelPollSource::new();
            let (batch_sender, batch_source) = ChannelBatchSource::new();

            let (bridge, records) = UpstreamBridge::new(
                Box::new(poll_source),
                Box::new(batch_source),
                Box::new(LogProducer),
                bridge_config,
            );

            Upstream {
                bridge,
                records,
                feed: Some(FeedInputs {
                    records: record_sender,
                    batches: batch_sender,
                }),
            }
        },
        UpstreamMode::Disabled => {
            let (_record_sender, poll_source) = ChannelPollSource::new();
            let (_batch_sender, batch_source) = ChannelBatchSource::new();

            let (bridge, records) = UpstreamBridge::new(
                Box::new(poll_source),
                Box::new(batch_source),
                Box::new(LogProducer),
                bridge_config,
            );

            Upstream {
                bridge,
                records,
                feed: None,
            }
        },
    }
}

fn startup_mode(mode: sb_config::StartupMode) -> sb_bridge::StartupMode {
    match mode {
        sb_config::StartupMode::Strict => sb_bridge::StartupMode::Strict,
        sb_config::StartupMode::Permissive => sb_bridge::StartupMode::Permissive,
    }
}
