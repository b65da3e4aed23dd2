use crate::{BatchSource, Result};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

/// Batch-style source backed by an in-process channel. The
/// subscription ends when every sender is dropped.
pub struct ChannelBatchSource {
    receiver: mpsc::UnboundedReceiver<Vec<Bytes>>,
}

impl ChannelBatchSource {
    pub fn new() -> (mpsc::UnboundedSender<Vec<Bytes>>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (sender, Self { receiver })
    }
}

#[async_trait]
impl BatchSource for ChannelBatchSource {
    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn next_batch(&mut self) -> Result<Option<Vec<Bytes>>> {
        Ok(self.receiver.recv().await)
    }
}
