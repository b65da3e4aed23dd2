use crate::{PollSource, Result};

use sb_core::Record;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Poll-style source backed by an in-process channel. Each poll drains
/// whatever accumulated since the previous tick, so the feeding side
/// is never blocked by the bridge's interval.
pub struct ChannelPollSource {
    receiver: mpsc::UnboundedReceiver<Record>,
}

impl ChannelPollSource {
    pub fn new() -> (mpsc::UnboundedSender<Record>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (sender, Self { receiver })
    }
}

#[async_trait]
impl PollSource for ChannelPollSource {
    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn poll(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        while let Ok(record) = self.receiver.try_recv() {
            records.push(record);
        }

        Ok(records)
    }
}
